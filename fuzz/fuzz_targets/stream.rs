#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_bitstream::fuzz::stream::{harness, FuzzCase};

fuzz_target!(|data: FuzzCase| harness(data));

/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod stream;

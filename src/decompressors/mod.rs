// SPDX-License-Identifier: LGPL-2.1

//! Decompressors for in-camera compression formats.

pub mod srw3;

/*!
 Contains logic and data structures used to parse RIFF data into a native Rust chunk tree.

 ## Overview

 RIFF (Resource Interchange File Format) is a little-endian, length-prefixed
 container format: every chunk opens with a 4-byte tag and a 4-byte declared
 size, and the two reserved tags `RIFF` and `LIST` introduce containers whose
 bodies are a 4-byte form type followed by nested chunks. WAVE audio and AVI
 video are the best-known profiles.

 ## Origin

 The format was published in 1991 by IBM and Microsoft as part of the
 Multimedia Programming Interface and Data Specification.

 ## Features

 - One parsing algorithm over both in-memory buffers and sequential readers
 - Bounds checking against author-controlled size fields
 - Bounded nesting depth and non-recursive teardown for hostile inputs
*/

pub mod models;
pub mod parser;

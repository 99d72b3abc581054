/*!
 This module contains types of errors that can happen when parsing RIFF data.
*/

pub mod chunk;
pub mod source;

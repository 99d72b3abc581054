/*!
 The main app runtime and tools it uses.
*/

pub mod error;
pub mod options;
pub mod printer;
pub mod runtime;

pub mod multipart;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;

mod credential;

pub use credential::Credential;

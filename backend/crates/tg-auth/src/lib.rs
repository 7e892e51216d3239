pub mod authorizer;
pub mod cookie_payload_codec;
pub mod error;
pub mod expiry_policy;
pub mod identity_record;
pub mod signature_verifier;
pub mod token_codec;
pub mod verified_identity;

mod escape;

pub use authorizer::{Authorizer, Rejection};
pub use cookie_payload_codec::CookiePayloadCodec;
pub use error::{AuthError, AuthResult};
pub use expiry_policy::ExpiryPolicy;
pub use identity_record::IdentityRecord;
pub use signature_verifier::SignatureVerifier;
pub use token_codec::TokenCodec;
pub use verified_identity::VerifiedIdentity;

/// Separator between positional token fields
pub const DEFAULT_TOKEN_SEPARATOR: char = '$';
/// Separator between `key=value` pairs of the cookie payload
pub const DEFAULT_COOKIE_SEPARATOR: char = '&';
/// Number of positional fields in a token string
pub const TOKEN_FIELD_COUNT: usize = 7;

#[cfg(test)]
mod tests;

/// Data Transfer Objects for application layer
mod constitution_request;
mod constitution_response;

pub use constitution_request::ConstitutionRequest;
pub use constitution_response::ConstitutionResponse;

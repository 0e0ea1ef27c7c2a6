// Public modules
pub mod access_token;
pub mod chat_message;
pub mod chat_request;
pub mod chat_response;
pub mod property;
pub mod property_create_params;
pub mod property_image;
pub mod property_image_params;
pub mod property_update_params;
pub mod register_params;
pub mod upload_response;
pub mod user;
pub mod user_create_params;
pub mod user_role;
pub mod user_update_params;

// Re-exports
pub use access_token::AccessToken;
pub use chat_message::{ChatMessage, ChatRole};
pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use property::Property;
pub use property_create_params::PropertyCreateParams;
pub use property_image::PropertyImage;
pub use property_image_params::PropertyImageParams;
pub use property_update_params::PropertyUpdateParams;
pub use register_params::RegisterParams;
pub use upload_response::UploadResponse;
pub use user::User;
pub use user_create_params::UserCreateParams;
pub use user_role::Role;
pub use user_update_params::UserUpdateParams;

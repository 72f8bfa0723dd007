use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_put, error_message};
use gloo_net::http::Request;
use log::debug;
use shared::dto::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdateProfileRequest, UserDto};

pub async fn register(request: &RegisterRequest) -> Result<String, String> {
    debug!("Registering new account: {}", request.email);

    let response = Request::post(&api_url("/api/auth/register"))
        .json(request)
        .map_err(|e| format!("Failed to serialize register request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send register request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Failed to parse register response: {}", e))?;
    Ok(body.message)
}

pub async fn login(email: &str, password: &str) -> Result<String, String> {
    debug!("Attempting login for {}", email);

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize login request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send login request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse login response: {}", e))?;
    Ok(body.token)
}

/// Fetches the account behind the stored token
pub async fn profile() -> Result<UserDto, String> {
    let response = authenticated_get(&api_url("/api/auth/profile"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch profile: {}", e))?;

    if response.status() == 401 {
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserDto>()
        .await
        .map_err(|e| format!("Failed to parse profile: {}", e))
}

/// Saves name and phone, returning the updated account
pub async fn update_profile(request: &UpdateProfileRequest) -> Result<UserDto, String> {
    debug!("Updating profile");

    let response = authenticated_put(&api_url("/api/auth/profile"))
        .json(request)
        .map_err(|e| format!("Failed to serialize profile update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send profile update: {}", e))?;

    if response.status() == 401 {
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserDto>()
        .await
        .map_err(|e| format!("Failed to parse profile: {}", e))
}

use crate::user::error::UserError;
use crate::user::repository::UserRepository;
use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use log::{debug, info};
use shared::dto::auth::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use shared::models::user::User;
use validator::Validate;

#[async_trait::async_trait]
pub trait UserUseCase: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, UserError>;
    async fn login(&self, request: LoginRequest) -> Result<User, UserError>;
    async fn profile(&self, id: &str) -> Result<User, UserError>;
    async fn update_profile(&self, id: &str, request: UpdateProfileRequest) -> Result<User, UserError>;
}

pub struct UserUseCaseImpl<R: UserRepository> {
    pub repo: R,
}

fn hash_password(password: &str) -> Result<String, UserError> {
    let salt_string = argon2::password_hash::SaltString::generate(
        &mut argon2::password_hash::rand_core::OsRng,
    );
    Argon2::default()
        .hash_password(password.as_bytes(), &salt_string)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::Internal(format!("Failed to hash password: {}", e)))
}

#[async_trait::async_trait]
impl<R: UserRepository> UserUseCase for UserUseCaseImpl<R> {
    async fn register(&self, request: RegisterRequest) -> Result<User, UserError> {
        request
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let email = request.email.trim().to_lowercase();
        if self
            .repo
            .find_by_email(&email)
            .await
            .map_err(UserError::DatabaseError)?
            .is_some()
        {
            return Err(UserError::AlreadyExists);
        }

        let hashed_password = hash_password(&request.password)?;
        let phone = request.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        let user = User::new_for_db(email, hashed_password, Utc::now())
            .map_err(|e| UserError::Validation(e.to_string()))?
            .with_profile(request.name.trim(), phone);

        let created = self.repo.create(user).await.map_err(UserError::DatabaseError)?;
        info!("Created account {} ({})", created.email, created.id);
        Ok(created)
    }

    async fn login(&self, request: LoginRequest) -> Result<User, UserError> {
        let user = self
            .repo
            .find_by_email(request.email.trim())
            .await
            .map_err(UserError::DatabaseError)?
            .ok_or(UserError::NotFound)?;

        if user.verify_password(&request.password) {
            Ok(user)
        } else {
            debug!("Password mismatch for {}", user.email);
            Err(UserError::InvalidPassword)
        }
    }

    async fn profile(&self, id: &str) -> Result<User, UserError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(UserError::DatabaseError)?
            .ok_or(UserError::NotFound)
    }

    async fn update_profile(&self, id: &str, request: UpdateProfileRequest) -> Result<User, UserError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let updated = self
            .repo
            .update_profile(id, &request.name, request.phone.as_deref())
            .await
            .map_err(UserError::DatabaseError)?
            .ok_or(UserError::NotFound)?;
        info!("Updated profile for {}", updated.email);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::InMemoryUserRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: String::new(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let user = usecase
            .register(register_request("Gamer@Example.com", "secret99"))
            .await
            .unwrap();
        assert_eq!(user.email, "gamer@example.com");
        assert!(!user.id.is_empty());
        assert_ne!(user.password, "secret99");

        let logged_in = usecase
            .login(LoginRequest { email: "gamer@example.com".to_string(), password: "secret99".to_string() })
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        usecase.register(register_request("gamer@example.com", "secret99")).await.unwrap();
        let err = usecase
            .register(register_request("GAMER@example.com", "another1"))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::AlreadyExists);
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let err = usecase.register(register_request("gamer@example.com", "abc")).await.unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_failures() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        usecase.register(register_request("gamer@example.com", "secret99")).await.unwrap();

        let err = usecase
            .login(LoginRequest { email: "nobody@example.com".to_string(), password: "secret99".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound);

        let err = usecase
            .login(LoginRequest { email: "gamer@example.com".to_string(), password: "wrong".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, UserError::InvalidPassword);
    }

    #[tokio::test]
    async fn test_register_keeps_name_and_phone() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let request = RegisterRequest {
            name: "  Asha ".to_string(),
            phone: Some("9876543210".to_string()),
            ..register_request("asha@example.com", "secret99")
        };
        let user = usecase.register(request).await.unwrap();

        let profile = usecase.profile(&user.id).await.unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.phone.as_deref(), Some("9876543210"));
    }

    #[rstest]
    #[case("Asha K", Some("9123456789"), "Asha K", Some("9123456789"))]
    #[case("  Asha  ", Some(""), "Asha", None)]
    #[case("Asha", None, "Asha", None)]
    #[tokio::test]
    async fn test_update_profile(
        #[case] name: &str,
        #[case] phone: Option<&str>,
        #[case] expected_name: &str,
        #[case] expected_phone: Option<&str>,
    ) {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let request = RegisterRequest {
            phone: Some("9876543210".to_string()),
            ..register_request("asha@example.com", "secret99")
        };
        let user = usecase.register(request).await.unwrap();

        let updated = usecase
            .update_profile(&user.id, UpdateProfileRequest { name: name.to_string(), phone: phone.map(str::to_string) })
            .await
            .unwrap();
        assert_eq!(updated.name, expected_name);
        assert_eq!(updated.phone.as_deref(), expected_phone);
        assert_eq!(usecase.profile(&user.id).await.unwrap().name, expected_name);
    }

    #[rstest]
    #[case("   ", None)]
    #[case("Asha", Some("5123456789"))]
    #[tokio::test]
    async fn test_update_profile_rejects_invalid(#[case] name: &str, #[case] phone: Option<&str>) {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let user = usecase.register(register_request("asha@example.com", "secret99")).await.unwrap();

        let err = usecase
            .update_profile(&user.id, UpdateProfileRequest { name: name.to_string(), phone: phone.map(str::to_string) })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_profile_unknown_user() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        let err = usecase
            .update_profile("missing", UpdateProfileRequest { name: "Asha".to_string(), phone: None })
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound);
    }

    #[tokio::test]
    async fn test_profile_unknown_user() {
        let usecase = UserUseCaseImpl { repo: InMemoryUserRepository::default() };
        assert_eq!(usecase.profile("missing").await.unwrap_err(), UserError::NotFound);
    }
}

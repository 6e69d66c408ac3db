use crate::config::AppConfig;
use crate::errors::SimsError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 按全局配置的 Argon2 参数哈希密码
pub fn hash_password(password: &str) -> Result<String, SimsError> {
    let argon2 = &AppConfig::get().argon2;
    hash_password_with(
        password,
        argon2.memory_cost,
        argon2.time_cost,
        argon2.parallelism,
    )
}

pub fn hash_password_with(
    password: &str,
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
) -> Result<String, SimsError> {
    let params = Params::new(memory_cost, time_cost, parallelism, None)
        .map_err(|e| SimsError::validation(format!("Argon2 参数错误: {e}")))?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SimsError::validation(format!("密码哈希失败: {e}")))
}

/// 校验密码，参数从哈希串中读取
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

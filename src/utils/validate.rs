use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

/// 用户名：3 到 32 个字符，字母、数字、点、下划线或连字符
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

/// 管理员初始密码强度检查，返回全部不满足的项
pub fn password_weaknesses(password: &str) -> Vec<&'static str> {
    let mut weaknesses = Vec::new();
    if password.chars().count() < 8 {
        weaknesses.push("shorter than 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        weaknesses.push("no uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        weaknesses.push("no lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        weaknesses.push("no digit");
    }
    weaknesses
}

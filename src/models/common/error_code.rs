/// 业务错误码，写入 `ApiResponse.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1022,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,

    // 班级
    ClassroomNotFound = 3000,
}

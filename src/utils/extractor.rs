use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorNotFound};
use futures_util::future::{Ready, ready};

/// 路径中的班级ID，必须是正整数，否则按未找到处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeClassroomId(pub i64);

fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

impl FromRequest for SafeClassroomId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let id = req
            .match_info()
            .get("id")
            .and_then(parse_positive_id)
            .map(SafeClassroomId)
            .ok_or_else(|| ErrorNotFound("Classroom not found"));
        ready(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("1"), Some(1));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-3"), None);
        assert_eq!(parse_positive_id("1e3"), None);
        assert_eq!(parse_positive_id("99999999999999999999"), None);
    }
}

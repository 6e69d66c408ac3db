//! 工作流结果：渲染页面、重定向或未找到

/// 重定向目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// 登录入口
    Login,
    /// 班级列表
    ClassroomIndex,
    /// 班级详情
    ClassroomDetails(i64),
}

impl Redirect {
    pub fn location(&self) -> String {
        match self {
            Redirect::Login => "/login".to_string(),
            Redirect::ClassroomIndex => "/classrooms".to_string(),
            Redirect::ClassroomDetails(id) => format!("/classrooms/{id}"),
        }
    }
}

#[derive(Debug)]
pub enum Outcome<T> {
    Render(T),
    Redirect(Redirect),
    NotFound,
}

impl<T> Outcome<T> {
    /// 未登录时的统一结果
    pub fn login() -> Self {
        Outcome::Redirect(Redirect::Login)
    }

    pub fn page(self) -> Option<T> {
        match self {
            Outcome::Render(page) => Some(page),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Outcome::Redirect(target) => Some(*target),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        assert_eq!(Redirect::Login.location(), "/login");
        assert_eq!(Redirect::ClassroomIndex.location(), "/classrooms");
        assert_eq!(Redirect::ClassroomDetails(3).location(), "/classrooms/3");
    }

    #[test]
    fn test_accessors() {
        let outcome: Outcome<u8> = Outcome::login();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
        assert!(outcome.page().is_none());
        assert_eq!(Outcome::Render(5u8).page(), Some(5));
        assert!(Outcome::<u8>::NotFound.is_not_found());
    }
}

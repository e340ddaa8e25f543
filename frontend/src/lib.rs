//! MapPoints 前端应用
//!
//! 浏览器侧只做两件事：为核心库提供平台实现，以及渲染页面。
//! - `web::http` / `web::storage` / `web::router`: fetch、LocalStorage、History
//! - `toast`: 提示消息（核心库的 `Notifier`）
//! - `store`: 把核心库的动作层与响应式会话信号组装成应用上下文
//! - `components`: UI 组件层

mod components {
    pub mod layout;
    pub mod login;
    pub mod point;
    mod point_form;
    pub mod points;
    pub mod register;
    pub mod users;
}
mod store;
mod toast;

pub(crate) mod web {
    pub mod http;
    pub mod router;
    pub mod storage;
}

use crate::components::layout::{HomePage, NotFoundPage, Shell};
use crate::components::login::LoginPage;
use crate::components::point::{PointCreatePage, PointPage};
use crate::components::points::PointsPage;
use crate::components::register::RegisterPage;
use crate::components::users::UsersPage;
use crate::store::{create_session, load_config, provide_app};
use crate::toast::{ToastHost, provide_toasts};
use crate::web::router::{RouterOutlet, provide_router};

use leptos::prelude::*;
use mappoints::{AppRoute, SessionState};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Home => view! { <Shell><HomePage /></Shell> }.into_any(),
        AppRoute::Points { user } => view! { <Shell><PointsPage user=user /></Shell> }.into_any(),
        AppRoute::PointCreate => view! { <Shell><PointCreatePage /></Shell> }.into_any(),
        AppRoute::Point { id } => view! { <Shell><PointPage id=id /></Shell> }.into_any(),
        AppRoute::Users { user } => view! { <Shell><UsersPage user=user /></Shell> }.into_any(),
        AppRoute::NotFound => view! { <Shell><NotFoundPage /></Shell> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("[App] API at {}", config.api_url);

    // 1. 从 LocalStorage 恢复会话
    let (session, storage) = create_session(&config);

    // 2. 路由服务：注入严格的会话判断作为守卫条件
    let has_session = Signal::derive(move || session.with(SessionState::has_session));
    let router = provide_router(has_session);

    // 3. 提示与动作层
    let toasts = provide_toasts(config.toast_duration_ms);
    provide_app(config, session, storage, router, toasts);

    view! {
        <RouterOutlet matcher=route_matcher />
        <ToastHost />
    }
}

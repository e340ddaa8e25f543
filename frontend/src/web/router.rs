//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 写入 History -> 更新路由信号"。
//! 守卫规则本身在核心库 `mappoints::route::guard` 中定义。

use leptos::prelude::*;
use mappoints::route::guard;
use mappoints::{AppRoute, GuardDecision, Navigator};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径（含查询串）
fn current_path() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入的会话信号实现守卫，与存储模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// token 与当前用户是否同时存在
    has_session: Signal<bool>,
}

impl RouterService {
    fn new(has_session: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        Self {
            current_route,
            set_route,
            has_session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 按路径导航
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// **核心方法：导航与守卫**
    ///
    /// `use_push` 为 false 时使用 replaceState（初次加载与重定向）
    pub fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let from = self.current_route.get_untracked();
        let route = match guard(&target, &from, self.has_session.get_untracked()) {
            GuardDecision::Allow => target,
            GuardDecision::Redirect(redirect) => {
                log::info!("[Router] Access to {} denied, redirecting to {}", target, redirect);
                redirect
            }
        };

        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// 初次加载时对地址栏中的路由执行一次守卫
    fn guard_initial_route(&self) {
        let initial = self.current_route.get_untracked();
        self.navigate_to_route(initial, false);
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话结束时离开受保护页面
    fn setup_session_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let has_session = router.has_session.get();
            let route = router.current_route.get_untracked();

            if !has_session && route.requires_auth() {
                log::info!("[Router] Session ended, redirecting to login");
                router.navigate_to_route(AppRoute::auth_failure_redirect(&route), true);
            }
        });
    }
}

impl Navigator for RouterService {
    fn push(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }
}

/// 创建路由服务、初始化监听器并放入 Context
pub fn provide_router(has_session: Signal<bool>) -> RouterService {
    let router = RouterService::new(has_session);

    router.guard_initial_route();
    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，点击时走路由服务而不是整页刷新
///
/// 样式通过 `attr:class` 传入。
#[component]
pub fn Link(to: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(to.clone(), true);
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}

//! 应用上下文
//!
//! 把核心库的 `MapPoints` 与响应式信号接在一起：
//! - 会话状态保存在 `RwSignal<SessionState>` 中，组件直接读取即可自动刷新
//! - 写入只经由核心库的 `Store::commit`，这里的 `SignalState` 只是容器

use std::rc::Rc;

use leptos::prelude::*;
use mappoints::state::MapSettings;
use mappoints::store::hydrate;
use mappoints::{ClientConfig, KeyValueStorage, MapPoints, SessionState, StateCell, Store};

use crate::toast::ToastService;
use crate::web::http::FetchHttpClient;
use crate::web::router::RouterService;
use crate::web::storage::BrowserStorage;

/// 构建期指定的后端地址
const API_URL: Option<&str> = option_env!("MAPPOINTS_API_URL");

/// 信号作为状态容器
///
/// 核心库内部的读取不建立依赖；组件通过 `AppContext::session` 订阅。
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<SessionState>);

impl StateCell for SignalState {
    fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        self.0.update(f)
    }
}

pub type AppCore = MapPoints<FetchHttpClient, SignalState>;

/// 放入 Context 的应用句柄
///
/// `MapPoints` 内含 `Rc`，因此以 local 方式存放。
#[derive(Clone, Copy)]
pub struct AppContext {
    core: StoredValue<AppCore, LocalStorage>,
    session: RwSignal<SessionState>,
}

impl AppContext {
    /// 动作层句柄（克隆开销很小，可移入 `spawn_local`）
    pub fn core(&self) -> AppCore {
        self.core.get_value()
    }

    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    pub fn config(&self) -> ClientConfig {
        self.core.with_value(|core| core.config().clone())
    }
}

/// 从持久化存储恢复的会话信号
pub fn create_session(config: &ClientConfig) -> (RwSignal<SessionState>, Rc<dyn KeyValueStorage>) {
    let storage: Rc<dyn KeyValueStorage> = Rc::new(BrowserStorage);
    let state = hydrate(storage.as_ref(), MapSettings::from(config));
    log::info!(
        "[App] Restored session: token={}, user={}",
        state.token.is_some(),
        state.current_user.is_some()
    );
    (RwSignal::new(state), storage)
}

pub fn load_config() -> ClientConfig {
    ClientConfig::from_env_value(API_URL)
}

/// 组装动作层并放入 Context
pub fn provide_app(
    config: ClientConfig,
    session: RwSignal<SessionState>,
    storage: Rc<dyn KeyValueStorage>,
    router: RouterService,
    toasts: ToastService,
) -> AppContext {
    let store = Store::new(SignalState(session), storage);
    let core = MapPoints::new(
        config,
        FetchHttpClient,
        store,
        Rc::new(toasts),
        Rc::new(router),
    );

    let ctx = AppContext {
        core: StoredValue::new_local(core),
        session,
    };
    provide_context(ctx);
    ctx
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

//! 受保护页面的外框：导航栏、页面内容、地图版权信息

use crate::store::use_app;
use crate::web::router::Link;
use leptos::prelude::*;
use mappoints::AppRoute;

#[component]
pub fn NavBar() -> impl IntoView {
    let app = use_app();
    let session = app.session();

    let username = move || {
        session.with(|s| {
            s.current_user
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_default()
        })
    };
    let on_logout = move |_| app.core().logout();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home attr:class="btn btn-ghost text-xl">"MapPoints"</Link>
                <Link to=AppRoute::Points { user: None } attr:class="btn btn-ghost">"Points"</Link>
                <Link to=AppRoute::Users { user: None } attr:class="btn btn-ghost">"Users"</Link>
                <Link to=AppRoute::PointCreate attr:class="btn btn-ghost">"New point"</Link>
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">{username}</span>
                <button on:click=on_logout class="btn btn-outline btn-error">"Logout"</button>
            </div>
        </div>
    }
}

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_app().session();
    let attribution = move || session.with(|s| s.map.attribution.clone());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />
                {children()}
                <footer class="text-xs text-base-content/50 text-center" inner_html=attribution></footer>
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_app().session();
    let greeting = move || {
        session.with(|s| match &s.current_user {
            Some(user) => format!("Welcome, {}!", user.username),
            None => "Welcome!".to_string(),
        })
    };
    let own_points = move || {
        session.with(|s| AppRoute::Points {
            user: s.current_user.as_ref().map(|u| u.id.to_string()),
        })
    };

    view! {
        <div class="hero bg-base-100 rounded-box shadow-xl py-12">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{greeting}</h1>
                    <p class="text-base-content/70">
                        "Share interesting places, browse what others have found and leave comments."
                    </p>
                    <div class="flex gap-2 justify-center">
                        <Link to=AppRoute::Points { user: None } attr:class="btn btn-primary">"Browse points"</Link>
                        {move || view! { <Link to=own_points() attr:class="btn btn-outline">"My points"</Link> }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}

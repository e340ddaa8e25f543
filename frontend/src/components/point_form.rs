//! 点编辑表单
//!
//! 创建与编辑共用同一个表单，`PointFormState` 负责：
//! - 字段的持有与重置
//! - 从已有点回填
//! - 校验并转换为 `PointPayload`

use leptos::prelude::*;
use mappoints_shared::{Point, PointPayload};

#[derive(Clone, Copy)]
pub struct PointFormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub latitude: RwSignal<String>,
    pub longitude: RwSignal<String>,
}

impl PointFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            latitude: RwSignal::new(String::new()),
            longitude: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, point: &Point) {
        self.name.set(point.name.clone());
        self.description.set(point.description.clone());
        self.latitude.set(point.latitude.to_string());
        self.longitude.set(point.longitude.to_string());
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.latitude.set(String::new());
        self.longitude.set(String::new());
    }

    /// 名称必填，坐标必须是合法范围内的数字
    pub fn to_payload(&self) -> Result<PointPayload, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Please enter a name".to_string());
        }

        let latitude = parse_coordinate(&self.latitude.get_untracked(), 90.0)
            .ok_or_else(|| "Latitude must be a number between -90 and 90".to_string())?;
        let longitude = parse_coordinate(&self.longitude.get_untracked(), 180.0)
            .ok_or_else(|| "Longitude must be a number between -180 and 180".to_string())?;

        Ok(PointPayload {
            name,
            description: self.description.get_untracked(),
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
}

#[component]
pub fn PointForm(
    state: PointFormState,
    /// 提交按钮文字
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<PointPayload>,
) -> impl IntoView {
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match state.to_payload() {
            Ok(payload) => {
                set_error_msg.set(None);
                on_submit.run(payload);
            }
            Err(msg) => set_error_msg.set(Some(msg)),
        }
    };

    view! {
        <form class="card-body" on:submit=submit>
            {move || error_msg.get().map(|msg| view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{msg}</span>
                </div>
            })}

            <div class="form-control">
                <label for="name" class="label">
                    <span class="label-text">"Name"</span>
                </label>
                <input id="name" type="text" required
                    on:input=move |ev| state.name.set(event_target_value(&ev))
                    prop:value=move || state.name.get()
                    class="input input-bordered w-full"
                />
            </div>
            <div class="form-control">
                <label for="description" class="label">
                    <span class="label-text">"Description"</span>
                </label>
                <textarea id="description"
                    on:input=move |ev| state.description.set(event_target_value(&ev))
                    prop:value=move || state.description.get()
                    class="textarea textarea-bordered w-full"
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <label for="latitude" class="label">
                        <span class="label-text">"Latitude"</span>
                    </label>
                    <input id="latitude" type="text" required placeholder="46.056946"
                        on:input=move |ev| state.latitude.set(event_target_value(&ev))
                        prop:value=move || state.latitude.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="longitude" class="label">
                        <span class="label-text">"Longitude"</span>
                    </label>
                    <input id="longitude" type="text" required placeholder="14.505751"
                        on:input=move |ev| state.longitude.set(event_target_value(&ev))
                        prop:value=move || state.longitude.get()
                        class="input input-bordered w-full"
                    />
                </div>
            </div>
            <div class="form-control mt-6">
                <button class="btn btn-primary">{submit_label}</button>
            </div>
        </form>
    }
}

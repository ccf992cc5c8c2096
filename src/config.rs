//! Fixed tunables for the sketch.
//!
//! There is no environment or file configuration; everything lives in
//! [`SketchConfig::default`]. Tests build their own values.

/// Id of the container the content panel helpers rewrite.
pub const CONTENT_ID: &str = "content-frame";

/// One menu entry and the sprite sheet it animates on hover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuBinding {
    pub label: String,
    pub asset: String,
}

impl MenuBinding {
    pub fn new(label: &str, asset: &str) -> Self {
        Self {
            label: label.to_owned(),
            asset: asset.to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SketchConfig {
    /// Number of shapes in the field, fixed for the page lifetime.
    pub max_shapes: usize,
    /// Horizontal strips per sprite sheet.
    pub frame_count: usize,
    /// Minimum time between sprite frame advances (~6 fps).
    pub frame_interval_ms: f64,
    pub passcode: String,
    pub prompt_message: String,
    pub reject_message: String,
    pub size_step: f64,
    pub size_floor: f64,
    pub background: String,
    /// Top-left corner where the hovered sprite is drawn.
    pub sprite_origin: (f64, f64),
    /// Directory the sheets are served from, relative to the page.
    pub asset_dir: String,
    pub menus: Vec<MenuBinding>,
    pub canvas_id: String,
    pub menu_class: String,
    pub content_id: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            max_shapes: 30,
            frame_count: 12,
            frame_interval_ms: 166.0,
            passcode: "2025".to_owned(),
            prompt_message: "請輸入四位數密碼：".to_owned(),
            reject_message: "密碼錯誤，請重新輸入。".to_owned(),
            size_step: 0.1,
            size_floor: 0.1,
            background: "#faedcd".to_owned(),
            sprite_origin: (10.0, 10.0),
            asset_dir: "img".to_owned(),
            menus: vec![
                MenuBinding::new("自我介紹", "菲瑪.png"),
                MenuBinding::new("作品集", "黑馬.png"),
                MenuBinding::new("測驗卷", "白馬.png"),
                MenuBinding::new("教學影片", "宗馬.png"),
                MenuBinding::new("回到首頁", "騎馬.png"),
            ],
            canvas_id: "sketch".to_owned(),
            menu_class: "dropbtn".to_owned(),
            content_id: CONTENT_ID.to_owned(),
        }
    }
}

impl SketchConfig {
    /// Sprite sheet names, in menu order.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.menus.iter().map(|m| m.asset.as_str())
    }

    pub fn asset_for_label(&self, label: &str) -> Option<&str> {
        self.menus
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.asset.as_str())
    }

    pub fn asset_url(&self, asset: &str) -> String {
        format!("{}/{}", self.asset_dir, asset)
    }
}

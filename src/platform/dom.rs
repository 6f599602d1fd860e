//! Reveal stage backed by page elements

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::timer;
use crate::content::content_scale;
use crate::reveal::{Pose, RevealState, Stage, Tween};

/// CSS class that hides a section
const HIDDEN_CLASS: &str = "hidden";

pub struct DomStage {
    /// Element carrying the animated transform and opacity
    logo: HtmlElement,
    /// Full-screen overlay around the logo
    logo_section: Element,
    /// Positioned one viewport below the top; scrolled into view after a reveal
    content_section: Element,
    /// Token information panel inside the content section
    content_panel: Element,
    /// Scaled wrapper inside the panel
    content_inner: Option<HtmlElement>,
}

impl DomStage {
    /// Look up `#logo`, `#logo-section`, `#content-section` and `#content-panel`
    pub fn from_document(document: &Document) -> Option<Self> {
        let logo = document
            .get_element_by_id("logo")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            logo,
            logo_section: document.get_element_by_id("logo-section")?,
            content_section: document.get_element_by_id("content-section")?,
            content_panel: document.get_element_by_id("content-panel")?,
            content_inner: document
                .get_element_by_id("content-inner")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        })
    }

    /// Shrink the content panel to fit 80% of the viewport height
    pub fn fit_content(&self) {
        let Some(inner) = &self.content_inner else {
            return;
        };
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let scale = content_scale(viewport, inner.scroll_height() as f64);
        let _ = inner
            .style()
            .set_property("--content-scale", &scale.to_string());
    }

    fn set_hidden(element: &Element, hidden: bool) {
        let _ = element
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, hidden);
    }
}

impl Stage for DomStage {
    fn set_pose(&self, pose: Pose) {
        let style = self.logo.style();
        let _ = style.set_property("transform", &format!("scale({:.4})", pose.scale));
        let _ = style.set_property("opacity", &format!("{:.4}", pose.opacity));
    }

    async fn animate(&self, tween: Tween) {
        self.set_pose(tween.from);
        let Some(start) = timer::next_frame().await else {
            self.set_pose(tween.to);
            return;
        };
        loop {
            let Some(now) = timer::next_frame().await else {
                self.set_pose(tween.to);
                return;
            };
            let elapsed = now - start;
            self.set_pose(tween.sample(elapsed));
            if tween.is_finished(elapsed) {
                return;
            }
        }
    }

    async fn sleep(&self, ms: u32) {
        timer::sleep(ms).await;
    }

    fn prepare(&self, state: RevealState) {
        match state {
            RevealState::Logo => Self::set_hidden(&self.logo_section, false),
            RevealState::Content => Self::set_hidden(&self.content_panel, false),
        }
    }

    fn show(&self, state: RevealState) {
        Self::set_hidden(&self.logo_section, state != RevealState::Logo);
        Self::set_hidden(&self.content_panel, state != RevealState::Content);
        if state == RevealState::Content {
            self.fit_content();
        }
    }

    fn scroll_to_content(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.content_section
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else { return };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

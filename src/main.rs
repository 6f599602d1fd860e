//! Wowoo landing page entry point
//!
//! On the web this wires the page together and hands control to browser
//! events. Natively it checks the locale documents for missing keys.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{AddEventListenerOptions, Document, Element, MouseEvent, Node};

    use wowoo_landing::content::{self, EXPLORER_URL, SOCIAL_LINKS, SWITCHER_LANGUAGES};
    use wowoo_landing::i18n::{Language, LanguageResolver, Translator};
    use wowoo_landing::persistence::LocalStore;
    use wowoo_landing::platform::{self, DomStage, HttpSource};
    use wowoo_landing::reveal::RevealSequencer;
    use wowoo_landing::settings::SiteConfig;

    /// Everything the event handlers share, built once at startup
    struct App {
        document: Document,
        resolver: LanguageResolver<LocalStore>,
        translator: Translator<HttpSource>,
        sequencer: RevealSequencer,
        stage: DomStage,
        /// Set once the first translation load has been applied
        settled: Cell<bool>,
    }

    impl App {
        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.element(id) {
                let _ = el.class_list().toggle_with_force("hidden", hidden);
            }
        }

        /// Swap between the loading view and the page
        fn show_loading(&self, loading: bool) {
            self.set_hidden("loading", !loading);
            self.set_hidden("page", loading);
        }

        fn for_each_matching(&self, selector: &str, mut f: impl FnMut(&Element)) {
            let Ok(nodes) = self.document.query_selector_all(selector) else {
                return;
            };
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    f(&el);
                }
            }
        }

        /// Fill every translated text and attribute from the active table
        fn render(&self) {
            let lang = self.resolver.current();

            self.for_each_matching("[data-i18n]", |el| {
                if let Some(key) = el.get_attribute("data-i18n") {
                    el.set_text_content(Some(&self.translator.lookup(&key)));
                }
            });
            self.for_each_matching("[data-i18n-alt]", |el| {
                if let Some(key) = el.get_attribute("data-i18n-alt") {
                    let _ = el.set_attribute("alt", &self.translator.lookup(&key));
                }
            });

            if let Some(el) = self.element("whitepaper-link") {
                let _ = el.set_attribute("href", content::whitepaper_url(lang));
            }
            if let Some(root) = self.document.document_element() {
                let _ = root.set_attribute("lang", lang.as_code());
            }
            if let Some(el) = self.element("lang-flag") {
                el.set_text_content(content::switcher_flag(lang));
            }
            self.for_each_matching("#lang-menu [data-lang]", |el| {
                let active = el.get_attribute("data-lang").as_deref() == Some(lang.as_code());
                let _ = el.class_list().toggle_with_force("active", active);
            });

            self.stage.fit_content();
        }
    }

    /// Start loading `lang`; the newest request wins
    fn load_language(app: Rc<App>, lang: Language) {
        app.show_loading(true);
        spawn_local(async move {
            let outcome = app.translator.load(lang).await;
            if !outcome.is_applied() {
                return;
            }
            log::info!("Translations ready: {:?}", outcome);
            app.show_loading(false);
            app.render();

            if !app.settled.replace(true) {
                app.sequencer.settle_initial(&app.stage).await;
            }
        });
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wowoo landing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = SiteConfig::load();
        let locale = platform::browser_locale();
        let resolver = LanguageResolver::with_key(LocalStore, &config.storage_key, locale.as_deref());
        let translator = Translator::with_fallback(HttpSource::new(&config), config.fallback_language);
        let sequencer = RevealSequencer::new(config.reveal.clone());
        let stage = DomStage::from_document(&document)
            .expect("page is missing #logo, #logo-section, #content-section or #content-panel");

        let app = Rc::new(App {
            document,
            resolver,
            translator,
            sequencer,
            stage,
            settled: Cell::new(false),
        });

        setup_static_links(&app);
        setup_language_switcher(app.clone());
        setup_logo_click(app.clone());
        setup_scroll(app.clone());
        setup_resize(app.clone());
        setup_copy_button(app.clone());

        let initial = app.resolver.current();
        log::info!("Initial language: {} ({})", initial, initial.display_name());
        load_language(app, initial);
    }

    fn setup_static_links(app: &App) {
        if let Some(el) = app.element("explorer-link") {
            let _ = el.set_attribute("href", EXPLORER_URL);
        }
        for (name, url) in SOCIAL_LINKS {
            app.for_each_matching(&format!("[data-social=\"{}\"]", name), |el| {
                let _ = el.set_attribute("href", url);
            });
        }
    }

    fn setup_language_switcher(app: Rc<App>) {
        let switcher = app.element("lang-switcher").expect("no #lang-switcher");
        let menu = app.element("lang-menu").expect("no #lang-menu");

        // Menu entries
        for (lang, flag) in SWITCHER_LANGUAGES {
            let Ok(item) = app.document.create_element("button") else {
                continue;
            };
            let _ = item.set_attribute("type", "button");
            let _ = item.set_attribute("data-lang", lang.as_code());
            item.set_text_content(Some(&format!("{} {}", flag, lang.display_name())));

            let app = app.clone();
            let switcher = switcher.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = switcher.class_list().remove_1("open");
                if app.resolver.current() != lang {
                    app.resolver.set_language(lang);
                    load_language(app.clone(), lang);
                }
            });
            let _ = item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = menu.append_child(&item);
        }

        // Toggle button
        if let Some(button) = app.element("lang-button") {
            let switcher = switcher.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = switcher.class_list().toggle("open");
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Close on mousedown outside the dropdown
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !switcher.contains(target.as_ref()) {
                    let _ = switcher.class_list().remove_1("open");
                }
            });
            let _ = app
                .document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_logo_click(app: Rc<App>) {
        let Some(logo) = app.element("logo") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let app = app.clone();
            spawn_local(async move {
                app.sequencer.reveal_content(&app.stage).await;
            });
        });
        let _ = logo.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_scroll(app: Rc<App>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            if let Some(transition) = app.sequencer.on_scroll(y) {
                let app = app.clone();
                spawn_local(async move {
                    app.sequencer.run(transition, &app.stage).await;
                });
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        closure.forget();
    }

    fn setup_resize(app: Rc<App>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.stage.fit_content();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_copy_button(app: Rc<App>) {
        let Some(button) = app.element("copy-address") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let address = app.translator.lookup("tokenInfo.values.contractAddress");
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&address);
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => log::info!("Contract address copied"),
                    Err(e) => log::warn!("Clipboard write failed: {:?}", e),
                }
            });
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod locale_check {
    use std::path::PathBuf;

    use anyhow::{Context, bail};
    use clap::Parser;

    use wowoo_landing::content::REQUIRED_KEYS;
    use wowoo_landing::i18n::{Language, TranslationTable};

    /// Check the locale documents the page fetches at runtime
    #[derive(Debug, Parser)]
    #[command(name = "wowoo-landing", version, about)]
    pub struct Args {
        /// Directory holding `<code>.json` for every supported language
        #[arg(long, default_value = "locales")]
        pub locales: PathBuf,
    }

    pub fn run(args: &Args) -> anyhow::Result<()> {
        let mut incomplete = 0;

        for lang in Language::ALL {
            let path = args.locales.join(format!("{}.json", lang.as_code()));
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;

            let table = match TranslationTable::from_json(&json) {
                Ok(table) => table,
                Err(e) => {
                    log::error!("{}: {}", path.display(), e);
                    incomplete += 1;
                    continue;
                }
            };

            let missing = table.missing_keys(REQUIRED_KEYS);
            if missing.is_empty() {
                println!("✓ {} ({}) complete", lang, lang.display_name());
            } else {
                incomplete += 1;
                println!("✗ {} ({}) missing {} keys:", lang, lang.display_name(), missing.len());
                for key in missing {
                    println!("    {}", key);
                }
            }
        }

        if incomplete > 0 {
            bail!("{} locale(s) incomplete", incomplete);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Wowoo landing (native) - checking locales");
    log::info!("The page itself runs on the web: use `trunk serve`");

    let args = locale_check::Args::parse();
    locale_check::run(&args)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

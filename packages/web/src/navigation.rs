use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use page::{
    link_targets, next_header_state, ClickHit, HeaderState, MobileMenu, NavState, PageConfig,
    PageError, Throttle, SCROLLSPY_ROOT_MARGIN, SECTION_SELECTOR,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::dom;

/// Header, mobile menu, floating menu button and scrollspy.
pub struct Navigation {
    window: Window,
    document: Document,
    header: HtmlElement,
    panel: Option<Element>,
    hamburger: Option<Element>,
    floating: Option<Element>,
    backdrop: RefCell<Option<Element>>,
    links: Vec<Element>,
    state: RefCell<NavState>,
    menu: RefCell<MobileMenu>,
    throttle: RefCell<Throttle>,
    config: Rc<PageConfig>,
}

impl Navigation {
    pub fn boot(
        window: &Window,
        document: &Document,
        config: Rc<PageConfig>,
    ) -> Result<Rc<Self>, PageError> {
        let header = dom::require(document, ".navbar")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::MissingElement(".navbar"))?;

        let nav = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            header,
            panel: dom::query(document, ".nav-links"),
            hamburger: dom::query(document, ".hamburger-menu"),
            floating: document.get_element_by_id("floating-hamburger"),
            backdrop: RefCell::new(dom::query(document, ".mobile-menu-backdrop")),
            links: dom::query_all(document, ".nav-links a"),
            state: RefCell::new(NavState::default()),
            menu: RefCell::new(MobileMenu::default()),
            throttle: RefCell::new(Throttle::default()),
            config,
        });

        nav.sample();
        nav.listen_scroll()?;
        nav.listen_clicks()?;
        nav.listen_resize()?;
        nav.listen_links()?;
        if let Err(err) = nav.start_scrollspy() {
            tracing::warn!(error = %err, "scrollspy disabled");
        }
        Ok(nav)
    }

    pub fn header(&self) -> &HtmlElement {
        &self.header
    }

    pub fn header_height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }

    /// One pass of the scroll state machine.
    pub fn sample(&self) {
        let offset = dom::scroll_offset(&self.window);
        let width = dom::viewport_width(&self.window);
        let previous = *self.state.borrow();
        let next = next_header_state(previous, offset, width, &self.config.thresholds());
        if next.header != previous.header {
            tracing::debug!(offset, header = ?next.header, "header state changed");
        }
        *self.state.borrow_mut() = next;
        self.render_header();
    }

    /// Forces the header back into view, e.g. after jumping to an anchor.
    pub fn reveal_header(&self) {
        self.state.borrow_mut().reveal();
        self.render_header();
    }

    pub fn toggle_menu(&self) {
        if self.panel.is_none() || self.hamburger.is_none() {
            tracing::error!("mobile menu elements not found");
            return;
        }
        self.ensure_backdrop();

        let open = {
            let mut state = self.state.borrow_mut();
            self.menu.borrow_mut().toggle(&mut state)
        };
        tracing::debug!(open, "mobile menu toggled");
        self.render_menu();
        self.render_header();
    }

    pub fn close_menu(&self) {
        self.menu.borrow_mut().close();
        self.render_menu();
    }

    fn render_header(&self) {
        let state = *self.state.borrow();
        for header_state in [HeaderState::Visible, HeaderState::Hidden] {
            dom::set_class(&self.header, header_state.class(), header_state == state.header);
        }
        if let Some(floating) = &self.floating {
            dom::set_class(floating, "active", state.floating_active);
        }
    }

    fn render_menu(&self) {
        let open = self.menu.borrow().is_open();
        let backdrop = self.backdrop.borrow();
        for element in [self.panel.as_ref(), self.hamburger.as_ref(), backdrop.as_ref()]
            .into_iter()
            .flatten()
        {
            dom::set_class(element, "active", open);
        }
    }

    fn ensure_backdrop(&self) {
        if self.backdrop.borrow().is_some() {
            return;
        }
        match self.create_backdrop() {
            Ok(backdrop) => *self.backdrop.borrow_mut() = Some(backdrop),
            Err(err) => tracing::warn!(error = %err, "could not create menu backdrop"),
        }
    }

    fn create_backdrop(&self) -> Result<Element, PageError> {
        let backdrop = self
            .document
            .create_element("div")
            .map_err(dom::platform("createElement"))?;
        backdrop.set_class_name("mobile-menu-backdrop");
        dom::body(&self.document)?
            .append_child(&backdrop)
            .map_err(dom::platform("appendChild"))?;
        Ok(backdrop)
    }

    fn listen_scroll(self: &Rc<Self>) -> Result<(), PageError> {
        let nav = Rc::clone(self);
        dom::listen(&self.window, "scroll", move |_| {
            if !nav.throttle.borrow_mut().request() {
                return;
            }
            let pass = Rc::clone(&nav);
            Timeout::new(nav.config.throttle_ms, move || {
                pass.sample();
                pass.throttle.borrow_mut().release();
            })
            .forget();
        })
    }

    fn listen_clicks(self: &Rc<Self>) -> Result<(), PageError> {
        let nav = Rc::clone(self);
        dom::listen(&self.document, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let inside = |element: &Option<Element>| {
                element
                    .as_ref()
                    .is_some_and(|element| element.contains(Some(&target)))
            };
            let hit = ClickHit {
                in_panel: inside(&nav.panel),
                in_toggle: inside(&nav.hamburger),
                in_floating: inside(&nav.floating),
            };
            if nav.menu.borrow_mut().click(hit) {
                nav.render_menu();
            }
        })
    }

    fn listen_resize(self: &Rc<Self>) -> Result<(), PageError> {
        let nav = Rc::clone(self);
        dom::listen(&self.window, "resize", move |_| {
            let width = dom::viewport_width(&nav.window);
            let changed = {
                let mut state = nav.state.borrow_mut();
                nav.menu
                    .borrow_mut()
                    .resize(&mut state, width, nav.config.mobile_breakpoint)
            };
            if changed {
                nav.render_menu();
                nav.render_header();
            }
        })
    }

    fn listen_links(self: &Rc<Self>) -> Result<(), PageError> {
        for link in &self.links {
            let nav = Rc::clone(self);
            dom::listen(link, "click", move |_| {
                nav.state.borrow_mut().floating_active = false;
                nav.render_header();
            })?;
        }
        Ok(())
    }

    fn start_scrollspy(self: &Rc<Self>) -> Result<(), PageError> {
        let sections = dom::query_all(&self.document, SECTION_SELECTOR);
        if sections.is_empty() || self.links.is_empty() {
            return Ok(());
        }
        let links = self.links.clone();
        dom::observe(&sections, 0.0, SCROLLSPY_ROOT_MARGIN, move |section, _| {
            let id = section.id();
            for link in &links {
                let href = link.get_attribute("href").unwrap_or_default();
                dom::set_class(link, "active", link_targets(&href, &id));
            }
        })?;
        Ok(())
    }
}

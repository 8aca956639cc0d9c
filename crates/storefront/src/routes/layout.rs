//! Page sections and the shared layout data every page renders.

use tower_sessions::Session;

use crate::error::Result;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// The storefront's top-level sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Catalog,
    About,
    Delivery,
    Reviews,
    Contacts,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Catalog,
        Self::About,
        Self::Delivery,
        Self::Reviews,
        Self::Contacts,
    ];

    /// Path the section is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::About => "/about",
            Self::Delivery => "/delivery",
            Self::Reviews => "/reviews",
            Self::Contacts => "/contacts",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::About => "О нас",
            Self::Delivery => "Доставка",
            Self::Reviews => "Отзывы",
            Self::Contacts => "Контакты",
        }
    }
}

/// A navigation link.
#[derive(Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Data the base template needs on every page.
#[derive(Clone)]
pub struct Layout {
    pub nav: Vec<NavItem>,
    /// Units in the visitor's cart, shown on the header badge.
    pub cart_count: u32,
}

impl Layout {
    /// Layout with `active` highlighted in the navigation.
    ///
    /// `active` is `None` for pages outside the section navigation, like the cart.
    #[must_use]
    pub fn new(active: Option<Section>, cart_count: u32) -> Self {
        let nav = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                label: section.label(),
                href: section.path(),
                active: Some(section) == active,
            })
            .collect();

        Self { nav, cart_count }
    }

    /// Layout for `active`, with the cart badge read from the visitor's session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(active: Option<Section>, state: &AppState, session: &Session) -> Result<Self> {
        let cart = load_cart(session, state.catalog()).await?;
        Ok(Self::new(active, cart.item_count()))
    }
}

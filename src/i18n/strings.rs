//! Placeholder page copy per locale.
//!
//! Only the handful of strings the "coming soon" pages need live here. Any
//! supported locale without its own table falls back to [`ENGLISH_STRINGS`].

/// User-facing copy for the placeholder pages.
#[derive(Debug, Clone)]
pub struct PageStrings {
    /// Site name shown in the `<title>` and header.
    pub site_name: &'static str,

    /// Body text under every placeholder heading.
    pub coming_soon: &'static str,

    // ==================== Page Headings ====================
    pub home: &'static str,
    pub browse: &'static str,
    pub search: &'static str,
    pub providers: &'static str,
    pub supporters: &'static str,
    pub donate: &'static str,
    pub dashboard: &'static str,
    pub login: &'static str,
    pub signup: &'static str,

    /// Heading of the 404 page.
    pub not_found: &'static str,
}

pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    site_name: "Skills for Charity",
    coming_soon: "This page is coming soon.",
    home: "Give your skills, support a cause",
    browse: "Browse offers",
    search: "Search",
    providers: "For providers",
    supporters: "For supporters",
    donate: "Donate",
    dashboard: "Dashboard",
    login: "Log in",
    signup: "Sign up",
    not_found: "Page not found",
};

pub const FRENCH_STRINGS: PageStrings = PageStrings {
    site_name: "Talents Solidaires",
    coming_soon: "Cette page arrive bientôt.",
    home: "Offrez vos talents, soutenez une cause",
    browse: "Parcourir les offres",
    search: "Rechercher",
    providers: "Pour les prestataires",
    supporters: "Pour les donateurs",
    donate: "Faire un don",
    dashboard: "Tableau de bord",
    login: "Connexion",
    signup: "Inscription",
    not_found: "Page introuvable",
};

pub const SPANISH_STRINGS: PageStrings = PageStrings {
    site_name: "Talentos Solidarios",
    coming_soon: "Esta página estará disponible pronto.",
    home: "Comparte tus habilidades, apoya una causa",
    browse: "Explorar ofertas",
    search: "Buscar",
    providers: "Para proveedores",
    supporters: "Para donantes",
    donate: "Donar",
    dashboard: "Panel",
    login: "Iniciar sesión",
    signup: "Registrarse",
    not_found: "Página no encontrada",
};

impl PageStrings {
    /// Copy for a locale code, falling back to English when none exists.
    pub fn for_locale(code: &str) -> &'static PageStrings {
        match code {
            "fr" => &FRENCH_STRINGS,
            "es" => &SPANISH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Whether a dedicated table exists for this locale code.
    pub fn has_translation(code: &str) -> bool {
        matches!(code, "en" | "fr" | "es")
    }
}

// ── Landing catalog ──
//
// Static content of the LeadSearch landing page. Shared by the CLI
// (`stats`) and the terminal UI so both show the same figures.

use serde::Serialize;

pub const BRAND: &str = "LeadSearch";
pub const NAV_ITEMS: [&str; 2] = ["Preços", "Login"];

pub const HERO_TITLE: &str = "Encontre empresas em nossa base de dados";
pub const HERO_SUBTITLE: &str = "Acesse informações detalhadas de milhões de empresas brasileiras";

pub const TOTAL_COMPANIES: &str = "63.328.558";
pub const TOTAL_CAPTION: &str = "EMPRESAS CADASTRADAS";

pub const SEARCH_PLACEHOLDER: &str = "Digite sua busca aqui...";
pub const SUBMIT_LABEL: &str = "Buscar";
pub const SUBMIT_LABEL_LOADING: &str = "Buscando...";

pub const STATES_TITLE: &str = "Distribuição por Estado";
pub const CTA_LABEL: &str = "Baixar Amostra Grátis";
pub const COPYRIGHT: &str = "© 2024 LeadSearch. Todos os direitos reservados.";

/// Registered companies in one federative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub uf: &'static str,
    pub companies: &'static str,
}

/// Display order matches the landing page.
pub const STATE_COUNTS: [StateCount; 8] = [
    StateCount { uf: "AC", companies: "148.547" },
    StateCount { uf: "AL", companies: "607.395" },
    StateCount { uf: "AM", companies: "671.726" },
    StateCount { uf: "AP", companies: "142.344" },
    StateCount { uf: "BA", companies: "2.748.553" },
    StateCount { uf: "CE", companies: "1.247.859" },
    StateCount { uf: "DF", companies: "989.734" },
    StateCount { uf: "ES", companies: "754.283" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Exportação em Massa",
        description: "Exporte dados em diversos formatos para análise detalhada",
    },
    FeatureCard {
        title: "Dados Completos",
        description: "Informações detalhadas sobre sócios e administradores",
    },
    FeatureCard {
        title: "Filtro por Localização",
        description: "Encontre empresas por estado, cidade ou região",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 4],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Sobre",
        links: ["Quem Somos", "Nossa API", "Preços", "Contato"],
    },
    FooterColumn {
        title: "Recursos",
        links: ["Base de Dados", "Integrações", "Documentação", "Suporte"],
    },
    FooterColumn {
        title: "Legal",
        links: ["Termos de Uso", "Privacidade", "Cookies", "Licenças"],
    },
    FooterColumn {
        title: "Redes Sociais",
        links: ["LinkedIn", "Twitter", "Instagram", "Facebook"],
    },
];

/// Headline figures: total plus per-state distribution.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total: &'static str,
    pub states: &'static [StateCount],
}

pub fn stats() -> Stats {
    Stats {
        total: TOTAL_COMPANIES,
        states: &STATE_COUNTS,
    }
}

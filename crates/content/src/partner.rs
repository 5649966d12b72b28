use crate::Partner;

pub const DEFAULT_PARTNER_NAME: &str = "Parceiro da comunidade";
pub const DEFAULT_PARTNER_ABOUT: &str = "Cooperativa de reciclagem que fortalece a triagem solidária e gera renda para famílias catadoras.";
pub const DEFAULT_PARTNER_IMAGE: &str = "assets/partners/cooperfoz.svg";

/// Partner spotlight with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerProfile {
    pub name: String,
    pub title: String,
    pub about: String,
    pub maps: Option<String>,
    pub site: Option<PartnerSite>,
    pub tips: Vec<String>,
    pub image: String,
    pub image_alt: String,
    /// Shown when the logo fails to load.
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerSite {
    pub href: String,
    pub label: String,
    pub aria_label: String,
}

impl PartnerProfile {
    pub fn from_partner(partner: &Partner) -> Self {
        let name = partner
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_PARTNER_NAME.to_string());

        let site = partner.site.clone().filter(|s| !s.is_empty()).map(|href| {
            let label = if name.to_lowercase().contains("cooperfoz") {
                "Conhecer a Cooperfoz".to_string()
            } else {
                format!("Conhecer {name}")
            };
            PartnerSite {
                href,
                label,
                aria_label: format!("Visitar site de {name}"),
            }
        });

        let initials = name
            .split(' ')
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        PartnerProfile {
            title: format!("Parceiro da Comunidade: {name}"),
            about: partner
                .about
                .clone()
                .unwrap_or_else(|| DEFAULT_PARTNER_ABOUT.to_string()),
            maps: partner.maps.clone().filter(|m| !m.is_empty()),
            site,
            tips: partner.tips.clone(),
            image: partner
                .image
                .clone()
                .unwrap_or_else(|| DEFAULT_PARTNER_IMAGE.to_string()),
            image_alt: format!("Logotipo da {name}"),
            initials,
            name,
        }
    }

    pub fn maps_aria_label(&self) -> String {
        format!("Abrir rota para {} no Google Maps", self.name)
    }
}

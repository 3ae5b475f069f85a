use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub page: PageSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PageSettings {
    pub contact_form_id: String,
    pub header_class: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub header_scroll_threshold: f64,
    pub nav_class: String,
    pub nav_links_class: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub mobile_breakpoint: u32,
    pub fade_in_classes: Vec<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub fade_in_threshold: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub fade_in_bottom_margin: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub scroll_to_top_threshold: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            contact_form_id: "contactForm".into(),
            header_class: "header".into(),
            header_scroll_threshold: 100.0,
            nav_class: "nav".into(),
            nav_links_class: "nav-links".into(),
            mobile_breakpoint: 768,
            fade_in_classes: vec![
                "service-card".into(),
                "portfolio-item".into(),
                "testimonial-card".into(),
            ],
            fade_in_threshold: 0.1,
            fade_in_bottom_margin: 50.0,
            scroll_to_top_threshold: 300.0,
        }
    }
}

impl Settings {
    /// Reads `configuration.yaml`, then applies `APP__SECTION__KEY`
    /// environment overrides.
    pub fn get() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::new(
                "configuration.yaml",
                config::FileFormat::Yaml,
            ))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        settings.try_deserialize::<Self>()
    }
}

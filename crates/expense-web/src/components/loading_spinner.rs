use serde::Serialize;

use crate::renderer::Component;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadingSpinner {
    pub label: Option<String>,
}

impl Component for LoadingSpinner {
    const NAME: &'static str = "loading_spinner";
    const TEMPLATE: &'static str = include_str!("../../templates/loading_spinner.hbs");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Renderer;

    #[test]
    fn test_spinner_label() {
        let renderer = Renderer::new().unwrap();

        let html = LoadingSpinner::default().render(&renderer).unwrap();
        assert!(html.contains("Loading..."));

        let html = LoadingSpinner { label: Some("Saving group".to_string()) }
            .render(&renderer)
            .unwrap();
        assert!(html.contains("Saving group"));
    }
}

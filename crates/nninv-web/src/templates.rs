//! Page templates, compiled into the binary and rendered with minijinja.

use minijinja::Environment;
use nninv_common::resolve_link;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("investigate.html", include_str!("../templates/investigate.html")),
    ("add_pair.html", include_str!("../templates/add_pair.html")),
];

/// Template environment with `curie_url(curie)` available to every page.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(|name: &str| {
        Ok(TEMPLATES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, source)| source.to_string()))
    });
    env.add_function("curie_url", curie_url);
    env
}

fn curie_url(curie: String) -> String {
    resolve_link(&curie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_load() {
        let env = environment();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_curie_url_function() {
        let env = environment();
        let out = env
            .render_str("{{ curie_url('MESH:D014867') }}|{{ curie_url('nocolon') }}", context! {})
            .unwrap();
        assert!(out.starts_with("https://"));
        assert!(out.contains("D014867"));
        assert!(out.ends_with('|'));
    }

    #[test]
    fn test_html_is_escaped() {
        let env = environment();
        let tmpl = env.get_template("add_pair.html").unwrap();
        let out = tmpl
            .render(context! { flash => context! { notice => "<b>bold</b>", level => "error" } })
            .unwrap();
        assert!(out.contains("&lt;b&gt;bold&lt;&#x2f;b&gt;"));
        assert!(!out.contains("<b>"));
    }
}

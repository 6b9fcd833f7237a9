use services::CelebrationBurst;

/// Fire a canvas-confetti burst if the library made it onto the page.
pub(super) fn confetti_script(burst: CelebrationBurst) -> String {
    format!(
        r#"(function() {{
                    if (typeof confetti !== "function") {{
                        return;
                    }}
                    confetti({{
                        particleCount: {particles},
                        spread: {spread},
                        origin: {{ y: {origin_y} }},
                    }});
                }})();"#,
        particles = burst.particle_count,
        spread = burst.spread,
        origin_y = burst.origin_y,
    )
}

pub(super) fn focus_script(id: &str) -> String {
    format!("document.getElementById({id:?})?.focus();")
}

//! src/routes/landing/mod.rs
use super::layout::document;
use crate::domain::{LandingPage, TODAYS_WORDS};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder};
use htmlescape::encode_minimal;
use rand::Rng;
use std::fmt::Write;
use std::time::{Duration, Instant};

mod get;
pub use get::*;

mod post;
pub use post::*;

const CONFETTI_PIECES: usize = 200;
const CONFETTI_COLORS: [&str; 8] = [
    "#f44336", "#e91e63", "#9c27b0", "#3f51b5", "#03a9f4", "#4caf50", "#ffeb3b", "#ff9800",
];

const SCRIPT: &str = r#"
(() => {
    const pattern = /^[^\s@]+@[^\s@]+\.[^\s@]{2,}$/i;
    const form = document.getElementById("signup");
    const input = form.querySelector("input[name=email]");
    const button = form.querySelector("button[type=submit]");
    let sending = false;

    input.addEventListener("input", () => {
        button.disabled = sending || !pattern.test(input.value);
    });
    form.addEventListener("submit", (event) => {
        if (sending || !pattern.test(input.value)) {
            event.preventDefault();
            return;
        }
        sending = true;
        button.disabled = true;
        button.textContent = "Sending...";
    });

    const confetti = document.getElementById("confetti");
    if (confetti) {
        setTimeout(() => confetti.remove(), Number(confetti.dataset.remainingMs));
    }

    const welcome = document.getElementById("welcome");
    if (welcome) {
        welcome.showModal();
    }

    const words = document.getElementById("words");
    if (!("IntersectionObserver" in window)) {
        words.classList.add("in-view");
        return;
    }
    const observer = new IntersectionObserver((entries) => {
        if (entries.some((entry) => entry.isIntersecting)) {
            words.classList.add("in-view");
            observer.disconnect();
        }
    }, { threshold: 0.2 });
    observer.observe(words);
})();
"#;

fn respond(mut builder: HttpResponseBuilder, page: &LandingPage) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .body(render(page, Instant::now()))
}

fn render(page: &LandingPage, now: Instant) -> String {
    let email = encode_minimal(page.email());
    let disabled = if page.submit_disabled() { " disabled" } else { "" };
    let label = if page.is_loading() {
        "Sending..."
    } else {
        "Let's Go! 🚀"
    };
    let message_html = page
        .message()
        .map(|message| format!(r#"<p class="message">{}</p>"#, encode_minimal(message)))
        .unwrap_or_default();
    let confetti_html = page
        .confetti()
        .map(|confetti| confetti.remaining(now))
        .filter(|remaining| !remaining.is_zero())
        .map(confetti)
        .unwrap_or_default();
    let popup_html = if page.popup_open() { popup() } else { String::new() };
    let words_html = daily_words();

    let body = format!(
        r#"{confetti_html}
<main>
    <section class="screen">
        <div class="column">
            <div class="brand">2Words</div>
            <div class="card">
                <h1>Level Up Your Vocab Game!</h1>
                <p>Get 2 new words delivered to your inbox daily 💪🧠</p>
                <p class="muted">No spam, no promos. Just pure vocabulary gains. Unsubscribe anytime.</p>
                <form id="signup" action="/" method="post">
                    <input type="email" name="email" placeholder="Drop your email here" value="{email}">
                    <button type="submit"{disabled}>{label}</button>
                </form>
                {message_html}
            </div>
            <div class="hint">
                <p>Scroll down for today&apos;s words</p>
                <span class="chevron">&#8964;</span>
            </div>
        </div>
    </section>
    <section class="screen">
        {words_html}
    </section>
</main>
{popup_html}"#
    );

    document("2Words", &body, SCRIPT)
}

fn daily_words() -> String {
    let mut entries = String::new();
    for entry in TODAYS_WORDS.iter() {
        let _ = write!(
            entries,
            r#"
            <div class="word">
                <h3>{}</h3>
                <p>{}</p>
                <p class="example">&quot;{}&quot;</p>
            </div>"#,
            encode_minimal(entry.word),
            encode_minimal(entry.definition),
            encode_minimal(entry.example),
        );
    }

    format!(
        r#"<div id="words" class="card words column">
            <h2>Daily words ✨</h2>{entries}
        </div>"#
    )
}

fn popup() -> String {
    r#"<dialog id="welcome">
    <form method="dialog">
        <button class="close" aria-label="Close">&times;</button>
    </form>
    <h2>You&apos;re Awesome! 🎉</h2>
    <p>An email 📧 will be sent to you at 8 AM ⏰ IST everyday!</p>
</dialog>"#
        .to_string()
}

/// Falling pieces, each timed to land before the effect ends.
fn confetti(remaining: Duration) -> String {
    let budget = remaining.as_millis() as u64;
    let mut rng = rand::thread_rng();
    let mut pieces = String::new();

    for _ in 0..CONFETTI_PIECES {
        let left: f32 = rng.gen_range(0.0..100.0);
        let color = CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())];
        let delay = rng.gen_range(0..=budget / 4);
        let duration = budget / 2 + rng.gen_range(0..=budget / 4);
        let _ = write!(
            pieces,
            r#"<i style="left:{left:.2}%;background:{color};animation-delay:{delay}ms;animation-duration:{duration}ms"></i>"#
        );
    }

    format!(r#"<div id="confetti" class="confetti" data-remaining-ms="{budget}">{pieces}</div>"#)
}

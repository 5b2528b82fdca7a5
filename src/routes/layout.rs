//! src/routes/layout.rs

const STYLE: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: #000;
    background: linear-gradient(to bottom, #f3f4f6, #fff);
    min-height: 100vh;
}
.screen {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.column { width: 100%; max-width: 28rem; }
.brand {
    font-size: 3.75rem;
    font-weight: 800;
    text-align: center;
    margin-bottom: 2rem;
    background: linear-gradient(to right, #374151, #000);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.card {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 0.75rem;
    padding: 2rem;
    box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
    text-align: center;
}
.card > * + * { margin-top: 1.5rem; }
.card h1 { font-size: 1.875rem; margin-bottom: 0; }
.card h2 { font-size: 1.5rem; margin-bottom: 1rem; }
.muted { color: #4b5563; font-size: 0.875rem; }
form > * + * { margin-top: 1rem; }
input[type=email] {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    font-size: 1rem;
}
button[type=submit] {
    width: 100%;
    padding: 0.5rem 1rem;
    border: 0;
    border-radius: 9999px;
    background: #000;
    color: #fff;
    font-weight: 700;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 200ms, background 200ms;
}
button[type=submit]:hover { background: #1f2937; transform: scale(1.05); }
button[type=submit]:disabled { opacity: 0.5; cursor: not-allowed; transform: none; }
.message { color: #ef4444; }
.status { display: flex; align-items: center; gap: 0.5rem; animation: rise 300ms ease-out; }
.status.success { color: #16a34a; }
.status.error { color: #dc2626; }
.hint { margin-top: 2rem; text-align: center; color: #6b7280; opacity: 0; animation: fade-in 500ms ease-out 1s forwards; }
.chevron { display: inline-block; margin-top: 0.5rem; animation: bounce 1s infinite; }
.word { background: #f3f4f6; padding: 1rem; border-radius: 0.5rem; text-align: left; }
.word h3 { margin: 0; font-size: 1.25rem; }
.word p { margin: 0.25rem 0 0; font-size: 0.875rem; }
.word .example { font-style: italic; margin-top: 0.5rem; }
.words { opacity: 0; transform: translateY(50px); transition: opacity 500ms, transform 500ms; }
.words.in-view { opacity: 1; transform: none; }
dialog {
    border: 0;
    border-radius: 0.75rem;
    padding: 2rem;
    max-width: 28rem;
    width: 100%;
    text-align: center;
    animation: pop 300ms ease-out;
}
dialog::backdrop { background: rgb(0 0 0 / 0.5); }
dialog .close {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    border: 0;
    background: none;
    color: #6b7280;
    font-size: 1.5rem;
    cursor: pointer;
}
.confetti { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 60; }
.confetti i {
    position: absolute;
    top: -20px;
    width: 8px;
    height: 14px;
    animation-name: fall;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}
@keyframes fall { to { top: 110vh; transform: rotate(720deg); } }
@keyframes fade-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes pop { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
@keyframes bounce { 0%, 100% { transform: translateY(-25%); } 50% { transform: none; } }
"#;

/// Wraps a page body in the shared document shell.
pub(super) fn document(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
<script>{script}</script>
</body>
</html>"#,
    )
}

//! Landing page route: `GET /`
//!
//! Serves the single-page marketing site. The page is assembled from the
//! embedded templates below with `{{PLACEHOLDER}}` substitution; service
//! options and FAQ entries are rendered from typed tables with `maud`, which
//! also escapes the configured contact values. All client-side
//! behavior (lead form, FAQ accordion, theme toggle, scroll reveal, chat
//! widget) lives in [`LANDING_SCRIPT`] and talks only to `/api/leads` and
//! `/api/chat`.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use chrono::Datelike;
use maud::{PreEscaped, html};

use lookout_core::lead::ServiceType;

use crate::config::SiteConfig;
use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

/// A question and answer shown in the FAQ accordion.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ entries, in display order.
pub const FAQS: [Faq; 5] = [
    Faq {
        question: "Do you provide a free site visit?",
        answer: "Yes. We offer a free on-site survey within Bangalore to understand camera points, cabling routes and recommend the right package for your space.",
    },
    Faq {
        question: "How long does a typical installation take?",
        answer: "For a standard 4&ndash;8 camera setup, installation is usually completed in the same day after confirmation. Larger layouts like apartments or offices may take 1&ndash;2 days.",
    },
    Faq {
        question: "Can I view my CCTV cameras on my mobile?",
        answer: "Absolutely. We configure mobile viewing apps so you can watch live, playback recordings and receive alerts from anywhere with internet access.",
    },
    Faq {
        question: "What kind of warranty and support do you provide?",
        answer: "We provide 1-year service warranty on installation workmanship, plus manufacturer warranty on cameras, NVRs/DVRs and other devices as per brand policy.",
    },
    Faq {
        question: "Do you support both homes and commercial spaces?",
        answer: "Yes. We install and maintain CCTV and biometric systems for independent houses, apartments, villas, shops, warehouses, offices and other commercial properties.",
    },
];

async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_landing(&state.site, chrono::Utc::now().year()))
}

/// Render the full landing page document.
pub fn render_landing(site: &SiteConfig, year: i32) -> String {
    let body = LANDING_BODY
        .replace("{{SERVICE_OPTIONS}}", &service_options())
        .replace("{{FAQ_ITEMS}}", &faq_items())
        .replace("{{TEL_HREF}}", &escape_html(&site.tel_href()))
        .replace("{{PHONE}}", &escape_html(&site.contact_phone))
        .replace("{{WHATSAPP_URL}}", &escape_html(&site.whatsapp_url()))
        .replace("{{YEAR}}", &year.to_string());

    let mut html = String::with_capacity(LANDING_HEAD.len() + body.len() + LANDING_SCRIPT.len());
    html.push_str(LANDING_HEAD);
    html.push_str(&body);
    html.push_str(LANDING_SCRIPT);
    html
}

fn service_options() -> String {
    let default = ServiceType::default();
    html! {
        @for service in ServiceType::ALL {
            option value=(service.label()) selected[service == default] { (service.label()) }
        }
    }
    .into_string()
}

fn faq_items() -> String {
    html! {
        @for (index, faq) in FAQS.iter().enumerate() {
            div class="faq-item reveal" data-faq=(index) {
                button type="button" class="faq-question" aria-expanded="false" {
                    span { (faq.question) }
                    span class="faq-toggle" { "+" }
                }
                div class="faq-answer" hidden {
                    // Answers are trusted markup with HTML entities.
                    p { (PreEscaped(faq.answer)) }
                }
            }
        }
    }
    .into_string()
}

/// Escape a config value for element content or a quoted attribute.
fn escape_html(input: &str) -> String {
    html! { (input) }.into_string()
}

/// Document head and styles.
const LANDING_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="light"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>LookOutline &mdash; Smart CCTV &amp; Biometric Security in Bangalore</title>
<meta name="description" content="Sales, installation and maintenance of CCTV cameras, NVRs and biometric attendance systems for homes, apartments and businesses in Bangalore."/>
<link rel="preconnect" href="https://fonts.googleapis.com"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin/>
<link href="https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;600;700;800&display=swap" rel="stylesheet"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#F7F8FB;--surface:#FFFFFF;--text:#14213D;--muted:#5B6478;--primary:#E63946;--accent:#FFB703;--blue:#219EBC;--border:rgba(20,33,61,.1);--font:'Plus Jakarta Sans',-apple-system,sans-serif}
[data-theme="dark"]{--bg:#0E1424;--surface:#161E33;--text:#EEF1F8;--muted:#9AA3B8;--border:rgba(238,241,248,.1)}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased;overflow-x:hidden;transition:background .3s,color .3s}
a{color:inherit;text-decoration:none}
.header{display:flex;align-items:center;justify-content:space-between;max-width:1140px;margin:0 auto;padding:20px 24px}
.logo-button{display:flex;align-items:center;gap:10px;background:none;border:none;cursor:pointer;font:800 20px var(--font);color:var(--text)}
.logo-button svg{width:34px;height:34px}
.nav-links{display:flex;align-items:center;gap:6px}
.nav-links a{color:var(--muted);font-size:14px;font-weight:600;padding:8px 14px;border-radius:50px;transition:all .2s}
.nav-links a:hover{color:var(--text);background:var(--border)}
.theme-toggle{border:1px solid var(--border);background:var(--surface);color:var(--text);border-radius:50px;padding:8px 14px;font:600 13px var(--font);cursor:pointer}
.hero{max-width:1140px;margin:0 auto;padding:48px 24px 72px;display:grid;grid-template-columns:1.15fr .85fr;gap:48px;align-items:start}
.hero h1{font-size:52px;font-weight:800;line-height:1.08;letter-spacing:-1.5px;margin-bottom:20px}
.subtitle{font-size:17px;color:var(--muted);margin-bottom:20px}
.features-list{list-style:none;margin-bottom:24px}
.features-list li{padding-left:26px;position:relative;margin-bottom:8px;font-weight:500}
.features-list li::before{content:'';position:absolute;left:0;top:8px;width:12px;height:12px;border-radius:50%;background:var(--primary)}
.quick-facts{display:flex;gap:12px;flex-wrap:wrap;margin-bottom:20px}
.fact-pill{background:var(--surface);border:1px solid var(--border);border-radius:14px;padding:10px 16px;display:flex;flex-direction:column}
.fact-label{font-weight:800;color:var(--primary)}
.fact-text{font-size:13px;color:var(--muted)}
.mini-text{font-size:14px;color:var(--muted);margin-bottom:16px}
.lead-form{background:var(--surface);border:1px solid var(--border);border-radius:20px;padding:24px;display:flex;flex-direction:column;gap:12px;box-shadow:0 12px 40px rgba(20,33,61,.08)}
.form-row{display:flex;gap:12px}
.lead-form input,.lead-form select,.lead-form textarea{flex:1;width:100%;font:500 14px var(--font);padding:12px 14px;border-radius:12px;border:1px solid var(--border);background:var(--bg);color:var(--text)}
.lead-form button{font:700 15px var(--font);padding:14px;border:none;border-radius:50px;background:linear-gradient(135deg,var(--primary),#F77F00);color:#fff;cursor:pointer;transition:transform .2s}
.lead-form button:hover{transform:translateY(-2px)}
.lead-form button:disabled{opacity:.6;cursor:wait;transform:none}
.status-message{font-size:14px;font-weight:600;padding:10px 14px;border-radius:12px}
.status-message.success{background:rgba(46,196,182,.15);color:#1B998B}
.status-message.error{background:rgba(230,57,70,.12);color:var(--primary)}
.contact-quick{display:flex;flex-wrap:wrap;gap:12px;align-items:center;margin-top:20px;font-size:14px;color:var(--muted)}
.contact-link{font-weight:700;color:var(--text);border-bottom:2px solid var(--accent)}
.coming-soon{margin-top:18px;font-weight:700;color:var(--blue)}
.social{margin-top:12px;display:flex;gap:14px;font-size:14px;color:var(--muted)}
.hero-right{position:relative;min-height:420px}
.phone-card{position:relative;z-index:2;margin:0 auto;width:280px;background:var(--surface);border:1px solid var(--border);border-radius:32px;overflow:hidden;box-shadow:0 24px 60px rgba(20,33,61,.18)}
.phone-header{padding:14px;text-align:center;font-weight:700;border-bottom:1px solid var(--border)}
.phone-body{padding:18px;display:flex;flex-direction:column;gap:14px}
.camera-view{height:150px;border-radius:18px;background:linear-gradient(135deg,#14213D,#219EBC)}
.badge{align-self:flex-start;background:var(--accent);color:#14213D;font-size:12px;font-weight:800;padding:4px 10px;border-radius:50px}
.phone-text p{font-size:13px;color:var(--muted)}
.phone-btn{border:none;border-radius:50px;padding:10px;font:700 13px var(--font);background:var(--text);color:var(--bg)}
.shape{position:absolute;border-radius:50%;filter:blur(2px);opacity:.7}
.shape-red{width:140px;height:140px;background:var(--primary);top:10px;left:0}
.shape-yellow{width:100px;height:100px;background:var(--accent);bottom:20px;right:10px}
.shape-blue{width:80px;height:80px;background:var(--blue);bottom:80px;left:30px}
section h2{font-size:32px;font-weight:800;letter-spacing:-.5px;text-align:center;margin-bottom:8px}
.section-subtitle{text-align:center;color:var(--muted);margin-bottom:32px}
.timeline-section,.faq-section,.location-section,.trust-strip,.brands-section{max-width:1140px;margin:0 auto;padding:56px 24px}
.timeline-steps{display:grid;grid-template-columns:repeat(3,1fr);gap:18px}
.timeline-step{background:var(--surface);border:1px solid var(--border);border-radius:20px;padding:24px}
.timeline-number{width:40px;height:40px;border-radius:50%;display:flex;align-items:center;justify-content:center;font-weight:800;color:#fff;background:var(--primary);margin-bottom:14px}
.timeline-content p{font-size:14px;color:var(--muted)}
.trust-strip{display:grid;grid-template-columns:repeat(4,1fr);gap:14px}
.trust-item{display:flex;gap:12px;align-items:center;background:var(--surface);border:1px solid var(--border);border-radius:16px;padding:16px}
.trust-icon{width:36px;height:36px;border-radius:10px;background:rgba(255,183,3,.2)}
.trust-title{display:block;font-weight:800}
.trust-subtitle{font-size:13px;color:var(--muted)}
.brands-label{text-align:center;color:var(--muted);font-weight:600;margin-bottom:16px}
.brands-row{display:flex;flex-wrap:wrap;gap:10px;justify-content:center}
.brand-pill,.location-pill{border:1px solid var(--border);background:var(--surface);border-radius:50px;padding:8px 16px;font-size:14px;font-weight:600}
.faq-list{max-width:760px;margin:0 auto;display:flex;flex-direction:column;gap:10px}
.faq-item{background:var(--surface);border:1px solid var(--border);border-radius:16px;overflow:hidden}
.faq-question{width:100%;display:flex;justify-content:space-between;gap:16px;padding:18px 20px;background:none;border:none;font:700 15px var(--font);color:var(--text);text-align:left;cursor:pointer}
.faq-answer{padding:0 20px 18px;color:var(--muted);font-size:14px}
.faq-open .faq-toggle{color:var(--primary)}
.location-box{background:var(--surface);border:1px solid var(--border);border-radius:20px;padding:28px;max-width:860px;margin:0 auto}
.location-grid{display:flex;flex-wrap:wrap;gap:8px;margin:16px 0}
.location-note{font-size:14px;color:var(--muted)}
.floating-whatsapp{position:fixed;left:20px;bottom:20px;z-index:20;background:#25D366;color:#fff;font-weight:700;font-size:14px;padding:12px 18px;border-radius:50px;box-shadow:0 10px 30px rgba(37,211,102,.35)}
.chat-launcher{position:fixed;right:20px;bottom:20px;z-index:20;border:none;border-radius:50px;padding:12px 18px;font:700 14px var(--font);background:var(--text);color:var(--bg);cursor:pointer}
.chat-panel{position:fixed;right:20px;bottom:76px;z-index:20;width:320px;max-height:420px;display:flex;flex-direction:column;background:var(--surface);border:1px solid var(--border);border-radius:18px;box-shadow:0 20px 50px rgba(20,33,61,.2);overflow:hidden}
.chat-log{flex:1;overflow-y:auto;padding:14px;display:flex;flex-direction:column;gap:8px;font-size:14px}
.chat-bubble{padding:8px 12px;border-radius:14px;max-width:85%}
.chat-bubble.bot{background:var(--bg);align-self:flex-start}
.chat-bubble.user{background:var(--primary);color:#fff;align-self:flex-end}
.chat-form{display:flex;border-top:1px solid var(--border)}
.chat-form input{flex:1;border:none;padding:12px;font:500 14px var(--font);background:transparent;color:var(--text)}
.chat-form button{border:none;background:none;padding:0 14px;font:700 14px var(--font);color:var(--primary);cursor:pointer}
.footer{border-top:1px solid var(--border);max-width:1140px;margin:0 auto;padding:24px;text-align:center;font-size:13px;color:var(--muted)}
.reveal{opacity:0;transform:translateY(24px);transition:opacity .6s ease,transform .6s ease}
.reveal.is-visible{opacity:1;transform:none}
@media(max-width:860px){.hero{grid-template-columns:1fr}.hero h1{font-size:36px}.timeline-steps,.trust-strip{grid-template-columns:1fr}.form-row{flex-direction:column}.nav-links a{display:none}}
@media(prefers-reduced-motion:reduce){.reveal{opacity:1;transform:none;transition:none}}
</style></head>
"##;

/// Page body. Placeholders are substituted by [`render_landing`].
const LANDING_BODY: &str = r##"<body>
<div class="page" id="top">
<header class="header">
  <button type="button" class="logo-button" id="logo-button" aria-label="Go to home">
    <svg viewBox="0 0 34 34" fill="none"><rect width="34" height="34" rx="9" fill="#14213D"/><circle cx="17" cy="17" r="7" stroke="#FFB703" stroke-width="2.5"/><circle cx="17" cy="17" r="2.5" fill="#E63946"/></svg>
    LookOutline
  </button>
  <nav class="nav-links">
    <a href="#products">Products</a>
    <a href="#services">Services</a>
    <a href="#support">Support</a>
    <button type="button" class="theme-toggle" id="theme-toggle" aria-label="Toggle dark mode">Dark mode</button>
  </nav>
</header>

<main class="hero" id="services">
  <section class="hero-left">
    <h1>Smart CCTV &amp;<br/>Biometric Security</h1>
    <p class="subtitle">We&rsquo;re launching a full-stack security service platform &ndash; sales, installation and maintenance of CCTV cameras, NVRs, and biometric attendance systems for homes, apartments and businesses in Bangalore.</p>
    <ul class="features-list">
      <li>HD night vision CCTV for homes, offices &amp; apartments</li>
      <li>Biometric attendance, access control &amp; visitor logs</li>
      <li>Remote mobile viewing with alerts &amp; cloud backup options</li>
    </ul>
    <div class="quick-facts">
      <div class="fact-pill"><span class="fact-label">Free</span><span class="fact-text">On-site survey</span></div>
      <div class="fact-pill"><span class="fact-label">Same-day</span><span class="fact-text">Priority installs</span></div>
      <div class="fact-pill"><span class="fact-label">1 year</span><span class="fact-text">Service warranty</span></div>
    </div>
    <p class="mini-text">Leave your details and we&rsquo;ll get back to you with a free site visit &amp; quote as soon as we launch.</p>

    <form class="lead-form" id="lead-form" novalidate>
      <div class="form-row">
        <input type="text" name="name" placeholder="Your name *" required/>
        <input type="tel" name="phone" placeholder="Phone / WhatsApp *" required/>
      </div>
      <div class="form-row">
        <input type="email" name="email" placeholder="Email (optional)"/>
        <input type="text" name="city" placeholder="Area / City"/>
      </div>
      <div class="form-row">
        <select name="serviceType">
{{SERVICE_OPTIONS}}        </select>
      </div>
      <textarea name="message" rows="3" placeholder="Tell us briefly about your requirement"></textarea>
      <button type="submit" id="lead-submit">Get Early Access</button>
      <p class="status-message" id="lead-status" role="status" hidden></p>
    </form>

    <div class="contact-quick">
      <span>Prefer talking now?</span>
      <a href="{{TEL_HREF}}" class="contact-link">Call us: {{PHONE}}</a>
      <a href="{{WHATSAPP_URL}}" target="_blank" rel="noreferrer" class="contact-link">WhatsApp us</a>
    </div>
    <div class="coming-soon">We are almost ready to launch. Be the first to know.</div>
    <div class="social"><span>Follow us:</span><a href="#">LinkedIn</a><a href="#">Facebook</a><a href="#">Instagram</a></div>
  </section>

  <section class="hero-right">
    <div class="phone-card">
      <div class="phone-header">Live View</div>
      <div class="phone-body">
        <div class="camera-view"></div>
        <div class="badge">24&times;7 Monitoring</div>
        <div class="phone-text"><h3>Security Got Smarter</h3><p>Remote view, alerts, and access logs in one place.</p></div>
        <button type="button" class="phone-btn">Coming Soon</button>
      </div>
    </div>
    <div class="shape shape-red"></div>
    <div class="shape shape-yellow"></div>
    <div class="shape shape-blue"></div>
  </section>
</main>

<section class="timeline-section reveal">
  <h2>How it works</h2>
  <p class="section-subtitle">Just three simple steps to secure your home or business.</p>
  <div class="timeline-steps">
    <div class="timeline-step"><div class="timeline-number">1</div><div class="timeline-content"><h3>Share your requirement</h3><p>Submit the form or call/WhatsApp us with a few details about your property and the number of cameras you&rsquo;re thinking about.</p></div></div>
    <div class="timeline-step"><div class="timeline-number">2</div><div class="timeline-content"><h3>Free site visit &amp; quote</h3><p>Our technician visits your location, plans camera points &amp; cabling and shares the best options and a transparent quote.</p></div></div>
    <div class="timeline-step"><div class="timeline-number">3</div><div class="timeline-content"><h3>Installation &amp; handover</h3><p>We complete the installation, configure mobile view and train you on using the system &ndash; usually within 1 working day.</p></div></div>
  </div>
</section>

<section id="products">
  <section class="trust-strip reveal">
    <div class="trust-item"><div class="trust-icon"></div><div><span class="trust-title">500+ installations</span><span class="trust-subtitle">Homes &amp; businesses secured</span></div></div>
    <div class="trust-item"><div class="trust-icon"></div><div><span class="trust-title">4.9/5 rated service</span><span class="trust-subtitle">Trusted by Bangalore customers</span></div></div>
    <div class="trust-item"><div class="trust-icon"></div><div><span class="trust-title">Certified technicians</span><span class="trust-subtitle">Professional installation &amp; support</span></div></div>
    <div class="trust-item"><div class="trust-icon"></div><div><span class="trust-title">Bangalore-wide coverage</span><span class="trust-subtitle">Apartments, villas &amp; offices</span></div></div>
  </section>
  <section class="brands-section reveal">
    <p class="brands-label">We work with leading security brands</p>
    <div class="brands-row">
      <span class="brand-pill">Hikvision</span><span class="brand-pill">CP Plus</span><span class="brand-pill">Dahua</span>
      <span class="brand-pill">Honeywell</span><span class="brand-pill">Realme / TP-Link</span><span class="brand-pill">Biometric OEMs</span>
    </div>
  </section>
</section>

<section id="support">
  <section class="faq-section">
    <h2>Frequently asked questions</h2>
    <div class="faq-list" id="faq-list">
{{FAQ_ITEMS}}    </div>
  </section>
  <section class="location-section reveal">
    <h2>Where we currently serve</h2>
    <p class="section-subtitle">We&rsquo;re starting with complete coverage across Bangalore city.</p>
    <div class="location-box">
      <p><strong>Bangalore &ndash;</strong> North, South, East &amp; West</p>
      <div class="location-grid">
        <span class="location-pill">Electronic City</span><span class="location-pill">Whitefield</span><span class="location-pill">Marathahalli</span>
        <span class="location-pill">HSR Layout</span><span class="location-pill">BTM Layout</span><span class="location-pill">Yelahanka</span>
        <span class="location-pill">Hebbal</span><span class="location-pill">KR Puram</span><span class="location-pill">Jayanagar</span>
        <span class="location-pill">JP Nagar</span><span class="location-pill">Indiranagar</span><span class="location-pill">Many more localities&hellip;</span>
      </div>
      <p class="location-note">If you&rsquo;re within Bangalore city limits, we&rsquo;ll most likely cover your area. Leave your details above and we&rsquo;ll confirm service availability.</p>
    </div>
  </section>
</section>

<a href="{{WHATSAPP_URL}}" target="_blank" rel="noreferrer" class="floating-whatsapp">Chat on WhatsApp</a>

<button type="button" class="chat-launcher" id="chat-launcher" aria-expanded="false">Ask us</button>
<div class="chat-panel" id="chat-panel" hidden>
  <div class="chat-log" id="chat-log"><div class="chat-bubble bot">Hi! Ask me about pricing, installation time, AMC plans or the areas we cover.</div></div>
  <form class="chat-form" id="chat-form"><input type="text" name="message" placeholder="Type your question" autocomplete="off"/><button type="submit">Send</button></form>
</div>

<footer class="footer"><span>&copy; {{YEAR}} LookOutline. All rights reserved.</span></footer>
</div>
"##;

/// Client-side behavior.
const LANDING_SCRIPT: &str = r##"<script>
(function () {
  var root = document.documentElement;

  // Theme: attribute on <html>, initial value from the OS preference.
  var themeButton = document.getElementById('theme-toggle');
  function applyTheme(theme) {
    root.setAttribute('data-theme', theme);
    themeButton.textContent = theme === 'dark' ? 'Light mode' : 'Dark mode';
  }
  applyTheme(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light');
  themeButton.addEventListener('click', function () {
    applyTheme(root.getAttribute('data-theme') === 'dark' ? 'light' : 'dark');
  });

  document.getElementById('logo-button').addEventListener('click', function () {
    window.scrollTo({ top: 0, behavior: 'smooth' });
  });

  // FAQ: at most one item open; clicking the open item closes it.
  var openFaq = null;
  var faqItems = Array.prototype.slice.call(document.querySelectorAll('.faq-item'));
  function renderFaq() {
    faqItems.forEach(function (item) {
      var isOpen = item.getAttribute('data-faq') === openFaq;
      item.classList.toggle('faq-open', isOpen);
      item.querySelector('.faq-answer').hidden = !isOpen;
      item.querySelector('.faq-toggle').textContent = isOpen ? '−' : '+';
      item.querySelector('.faq-question').setAttribute('aria-expanded', String(isOpen));
    });
  }
  faqItems.forEach(function (item) {
    item.querySelector('.faq-question').addEventListener('click', function () {
      var index = item.getAttribute('data-faq');
      openFaq = openFaq === index ? null : index;
      renderFaq();
    });
  });

  // Scroll reveal.
  var revealed = document.querySelectorAll('.reveal');
  if ('IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          entry.target.classList.add('is-visible');
          observer.unobserve(entry.target);
        }
      });
    }, { threshold: 0.15 });
    revealed.forEach(function (el) { observer.observe(el); });
  } else {
    revealed.forEach(function (el) { el.classList.add('is-visible'); });
  }

  // Lead form.
  var form = document.getElementById('lead-form');
  var submit = document.getElementById('lead-submit');
  var status = document.getElementById('lead-status');
  function showStatus(type, message) {
    status.className = 'status-message ' + type;
    status.textContent = message;
    status.hidden = !message;
  }
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    showStatus('', '');
    submit.disabled = true;
    submit.textContent = 'Sending...';

    var data = {};
    new FormData(form).forEach(function (value, key) { data[key] = value; });

    fetch('/api/leads', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data)
    })
      .then(function (res) {
        return res.json().then(function (body) {
          if (!res.ok || !body.success) {
            throw new Error(body.message || 'Failed to send lead');
          }
        });
      })
      .then(function () {
        showStatus('success', 'Thank you! We’ll contact you shortly.');
        form.reset();
      })
      .catch(function (err) {
        console.error(err);
        showStatus('error', 'Something went wrong. Please call/WhatsApp us directly.');
      })
      .then(function () {
        submit.disabled = false;
        submit.textContent = 'Get Early Access';
      });
  });

  // Chat widget.
  var launcher = document.getElementById('chat-launcher');
  var panel = document.getElementById('chat-panel');
  var log = document.getElementById('chat-log');
  var chatForm = document.getElementById('chat-form');
  function bubble(kind, text) {
    var el = document.createElement('div');
    el.className = 'chat-bubble ' + kind;
    el.textContent = text;
    log.appendChild(el);
    log.scrollTop = log.scrollHeight;
  }
  launcher.addEventListener('click', function () {
    panel.hidden = !panel.hidden;
    launcher.setAttribute('aria-expanded', String(!panel.hidden));
  });
  chatForm.addEventListener('submit', function (event) {
    event.preventDefault();
    var input = chatForm.elements.message;
    var text = input.value;
    if (!text.trim()) { return; }
    bubble('user', text);
    input.value = '';
    fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message: text })
    })
      .then(function (res) { return res.json(); })
      .then(function (body) { bubble('bot', body.reply); })
      .catch(function () { bubble('bot', 'Sorry, I could not answer right now. Please WhatsApp us.'); });
  });
})();
</script>
</body></html>
"##;

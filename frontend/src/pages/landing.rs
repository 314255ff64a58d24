use yew::prelude::*;

use crate::components::cards::{GlassCard, SectionLabel};
use crate::components::fade_in::FadeIn;
use crate::config;
use crate::sections::Anchor;

const WORKFLOW_STEPS: [(&str, &str); 3] = [
    ("Input your Topic", "Type a keyword, sentence, or paste a URL. Our AI extracts context instantly."),
    ("Generate & Refine", "Get a perfectly formatted post. Tweak tone, add emojis, or regenerate hooks."),
    ("Grow (Upcoming)", "Schedule the post and track performance directly from the dashboard."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let app_url = config::APP_URL;

    html! {
        <div class="landing-page">
            <div class="background-glow">
                <div class="glow glow-top"></div>
                <div class="glow glow-bottom"></div>
            </div>

            <section class="hero">
                <div class="hero-content">
                    <FadeIn>
                        <div class="hero-badge">
                            <span class="badge-spark">{"✦"}</span>
                            <span>{"New: Viral Post Generator is Live"}</span>
                            <span class="badge-arrow">{"→"}</span>
                        </div>
                        <h1 class="hero-title">
                            {"The Ultimate "}<br />
                            <span class="gradient-text">{"LinkedIn Generator"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Create engaging, viral-ready LinkedIn posts in seconds with AI. Stop staring at a blank screen and start growing your audience."}
                        </p>
                        <div class="hero-cta-group">
                            <a href={app_url} class="hero-cta" rel="noopener noreferrer">
                                {"Try Generator Free →"}
                            </a>
                            <button class="hero-secondary">{"▶ See How It Works"}</button>
                        </div>
                    </FadeIn>

                    <FadeIn delay={200}>
                        <div class="dashboard-mock">
                            <div class="mock-sidebar">
                                <div class="mock-item active">{"⚡ Generator"}</div>
                                { for ["Trends", "Schedule", "Analytics"].iter().map(|item| html! {
                                    <div class="mock-item">{*item}</div>
                                }) }
                            </div>
                            <div class="mock-main">
                                <div class="mock-header">
                                    <div>
                                        <h3>{"New Post"}</h3>
                                        <p>{"AI-powered content generation"}</p>
                                    </div>
                                    <span class="mock-status">{"AI Model Ready"}</span>
                                </div>
                                <div class="mock-panels">
                                    <div class="mock-panel">
                                        <div class="mock-panel-title">{"Input"}</div>
                                        <div class="mock-input">{"Topic: How to build a personal brand..."}</div>
                                        // visual only, nothing is generated
                                        <div class="mock-generate">{"Generate"}</div>
                                    </div>
                                    <div class="mock-panel faded">
                                        <div class="mock-panel-title">{"Preview"}</div>
                                        <div class="mock-line short"></div>
                                        <div class="mock-line"></div>
                                        <div class="mock-line"></div>
                                        <div class="mock-image"></div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={Anchor::Generator.id()} class="features">
                <div class="section-inner">
                    <div class="section-heading">
                        <SectionLabel>{"Capabilities"}</SectionLabel>
                        <h2>{"Current & "}<span class="accent">{"Future"}</span>{" Tools"}</h2>
                        <p>{"Start with our powerful generator today. We are rapidly building the complete OS for LinkedIn creators."}</p>
                    </div>

                    <div class="feature-grid">
                        <FadeIn delay={100} class={classes!("full-height")}>
                            <GlassCard class={classes!("live")}>
                                <span class="card-tag live-tag">{"Live Now"}</span>
                                <div class="card-icon green">{"⚡"}</div>
                                <h3>{"Viral Post Generator"}</h3>
                                <p>{"Turn simple topics into high-performing LinkedIn posts instantly. Our AI optimizes for readability, tone, and viral hooks."}</p>
                                <a href={app_url} class="card-link" rel="noopener noreferrer">{"Try Generator →"}</a>
                            </GlassCard>
                        </FadeIn>
                        <FadeIn delay={200} class={classes!("full-height")}>
                            <GlassCard hover_effect={false}>
                                <span class="card-tag">{"Coming Soon"}</span>
                                <div class="card-icon blue">{"📈"}</div>
                                <h3>{"Trend Insights"}</h3>
                                <p>{"See what's trending on LinkedIn in real-time. Analyze winning strategies from top creators to inform your content."}</p>
                            </GlassCard>
                        </FadeIn>
                        <FadeIn delay={300} class={classes!("full-height")}>
                            <GlassCard hover_effect={false}>
                                <span class="card-tag">{"Coming Soon"}</span>
                                <div class="card-icon pink">{"⏰"}</div>
                                <h3>{"Smart Scheduler"}</h3>
                                <p>{"Schedule posts for peak engagement windows. Auto-plug your newsletter in comments after 1 hour."}</p>
                            </GlassCard>
                        </FadeIn>
                    </div>
                </div>
            </section>

            <section id={Anchor::Roadmap.id()} class="workflow">
                <div class="section-inner workflow-grid">
                    <FadeIn class={classes!("workflow-visual")}>
                        <div class="step-mock dim"><span class="step-dot">{"1"}</span><div class="mock-line"></div></div>
                        <div class="step-mock active"><span class="step-dot">{"2"}</span><div class="mock-line"></div><span class="badge-spark">{"✦"}</span></div>
                        <div class="step-mock dim"><span class="step-dot">{"3"}</span><div class="mock-line"></div></div>
                    </FadeIn>

                    <FadeIn class={classes!("workflow-text")}>
                        <SectionLabel>{"Workflow"}</SectionLabel>
                        <h2>{"How "}<span class="accent">{"Repost AI"}</span>{" Works"}</h2>
                        <div class="timeline">
                            { for WORKFLOW_STEPS.iter().map(|(title, text)| html! {
                                <div class="timeline-step">
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={Anchor::Pricing.id()} class="pricing">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Simple Pricing"}</h2>
                        <p>{"Lock in early adopter rates before we launch the full suite."}</p>
                    </div>
                    <div class="pricing-grid">
                        <div class="plan">
                            <h3>{"Free"}</h3>
                            <div class="price">{"$0"}<span>{"/mo"}</span></div>
                            <p class="plan-blurb">{"Perfect for trying out the generator."}</p>
                            <ul>
                                <li>{"✓ 5 Post Generations/mo"}</li>
                                <li>{"✓ Basic Formatting"}</li>
                            </ul>
                            <a href={app_url} class="plan-cta" rel="noopener noreferrer">{"Start Free"}</a>
                        </div>
                        <div class="plan pro">
                            <span class="early-bird">{"EARLY BIRD"}</span>
                            <h3>{"Pro Creator"}</h3>
                            <div class="price">{"$19"}<span>{"/mo"}</span></div>
                            <p class="plan-blurb">{"Unlimited power for serious creators."}</p>
                            <ul>
                                <li>{"✓ Unlimited Generations"}</li>
                                <li>{"✓ Premium Templates"}</li>
                                <li>{"✓ Priority Support"}</li>
                            </ul>
                            <a href={app_url} class="plan-cta primary" rel="noopener noreferrer">{"Get Pro Access"}</a>
                        </div>
                    </div>
                </div>
            </section>

            <section class="closing-cta">
                <div class="closing-box">
                    <h2>{"Ready to grow?"}</h2>
                    <p>{"Join the new wave of creators using Repost AI to generate content in seconds."}</p>
                    <a href={app_url} class="closing-button" rel="noopener noreferrer">{"Get Started for Free"}</a>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <span class="logo-text">{"Repost AI"}</span>
                        <p>{"The AI-powered workspace for modern LinkedIn creators. Write, design, and schedule in one place."}</p>
                    </div>
                    <div class="footer-columns">
                        <div>
                            <h4>{"Product"}</h4>
                            <ul>
                                { for Anchor::ALL.into_iter().map(|anchor| html! {
                                    <li key={anchor.id()}><a href={anchor.href()}>{anchor.label()}</a></li>
                                }) }
                            </ul>
                        </div>
                        <div>
                            <h4>{"Legal"}</h4>
                            <ul>
                                <li><a href="#">{"Privacy"}</a></li>
                                <li><a href="#">{"Terms"}</a></li>
                                <li><a href={config::CONTACT_MAILTO}>{"Contact"}</a></li>
                            </ul>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">{"© 2024 Launchnext.pro. All rights reserved."}</div>
            </footer>

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #05080F;
                    color: #e2e8f0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                .landing-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .background-glow {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }
                .glow {
                    position: absolute;
                    border-radius: 50%;
                }
                .glow-top {
                    top: -20%;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 800px;
                    height: 800px;
                    background: rgba(4, 164, 91, 0.1);
                    filter: blur(120px);
                }
                .glow-bottom {
                    bottom: 0;
                    right: -10%;
                    width: 600px;
                    height: 600px;
                    background: rgba(5, 150, 105, 0.05);
                    filter: blur(100px);
                }

                /* reveal */
                .fade-in {
                    opacity: 0;
                    transform: translateY(3rem);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }
                .fade-in.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .full-height {
                    height: 100%;
                }

                /* navigation */
                .top-nav {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s;
                    padding: 1.5rem 0;
                }
                .top-nav.transparent {
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(5, 8, 15, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 1rem 0;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #04a45b, #059669);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-weight: 700;
                }
                .logo-text {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: white;
                }
                .nav-links, .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .nav-link:hover, .nav-login:hover {
                    color: white;
                }
                .nav-login {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                .nav-cta {
                    padding: 0.625rem 1.25rem;
                    border-radius: 0.5rem;
                    background: white;
                    color: #020617;
                    font-weight: 700;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    background: #05080F;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .mobile-link {
                    font-size: 1.125rem;
                    color: #cbd5e1;
                    padding: 0.5rem 0;
                }
                .mobile-cta {
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    background: #04a45b;
                    color: white;
                    font-weight: 700;
                    text-align: center;
                }

                /* hero */
                .hero {
                    position: relative;
                    z-index: 1;
                    padding: 12rem 1.5rem 8rem;
                    text-align: center;
                }
                .hero-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .hero-badge {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.375rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .badge-spark {
                    color: #facc15;
                }
                .hero-title {
                    font-size: 4.5rem;
                    line-height: 1.1;
                    color: white;
                    margin-bottom: 2rem;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #04a45b, #34d399, #2dd4bf);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #94a3b8;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 5rem;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #04a45b, #059669);
                    color: white;
                    font-weight: 700;
                }
                .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    background: #1A1F2E;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .dashboard-mock {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    aspect-ratio: 16 / 10;
                    border-radius: 1rem;
                    background: #0B0F19;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    text-align: left;
                }
                .mock-sidebar {
                    width: 16rem;
                    padding: 1.5rem;
                    background: #0F121C;
                    border-right: 1px solid rgba(255, 255, 255, 0.05);
                }
                .mock-item {
                    padding: 0.625rem 1rem;
                    border-radius: 0.5rem;
                    color: #64748b;
                    font-size: 0.875rem;
                }
                .mock-item.active {
                    color: #04a45b;
                    background: rgba(4, 164, 91, 0.1);
                    border: 1px solid rgba(4, 164, 91, 0.2);
                }
                .mock-main {
                    flex: 1;
                    padding: 2rem;
                    background: linear-gradient(135deg, #0B0F19, #131722);
                }
                .mock-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .mock-header h3 {
                    color: white;
                    margin: 0;
                }
                .mock-header p {
                    color: #64748b;
                    font-size: 0.75rem;
                }
                .mock-status {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #34d399;
                    background: rgba(16, 185, 129, 0.1);
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .mock-panels {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .mock-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.25rem;
                    border-radius: 0.75rem;
                    background: #1A1F2E;
                }
                .mock-panel.faded {
                    background: rgba(26, 31, 46, 0.5);
                }
                .mock-panel-title {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #64748b;
                    text-transform: uppercase;
                }
                .mock-input {
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #0F121C;
                    font-size: 0.875rem;
                }
                .mock-generate {
                    padding: 0.625rem;
                    border-radius: 0.5rem;
                    background: #04a45b;
                    color: white;
                    text-align: center;
                    font-weight: 700;
                }
                .mock-line {
                    height: 0.5rem;
                    width: 100%;
                    border-radius: 0.25rem;
                    background: rgba(255, 255, 255, 0.1);
                }
                .mock-line.short {
                    width: 75%;
                }
                .mock-image {
                    height: 8rem;
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.2);
                }

                /* sections */
                .features, .workflow, .pricing, .closing-cta {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 1.5rem;
                }
                .features, .pricing {
                    background: #0B0F19;
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }
                .section-heading h2, .workflow-text h2, .closing-box h2 {
                    font-size: 3rem;
                    color: white;
                }
                .section-heading p {
                    color: #94a3b8;
                    font-size: 1.125rem;
                }
                .section-label {
                    display: inline-flex;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(4, 164, 91, 0.1);
                    border: 1px solid rgba(4, 164, 91, 0.2);
                    color: #04a45b;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .accent {
                    color: #04a45b;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .glass-card {
                    position: relative;
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(19, 23, 34, 0.6);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .glass-card.hoverable {
                    transition: all 0.3s;
                }
                .glass-card.hoverable:hover {
                    background: #1A1F2E;
                    transform: translateY(-0.25rem);
                }
                .glass-card.live {
                    border-color: rgba(4, 164, 91, 0.3);
                    background: rgba(19, 23, 34, 0.8);
                }
                .glass-card h3 {
                    color: white;
                }
                .glass-card p {
                    flex: 1;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .card-tag {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    background: #1A1F2E;
                    color: #94a3b8;
                    font-size: 0.625rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .card-tag.live-tag {
                    background: #04a45b;
                    color: white;
                }
                .card-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }
                .card-icon.green { background: rgba(4, 164, 91, 0.2); }
                .card-icon.blue { background: rgba(59, 130, 246, 0.1); }
                .card-icon.pink { background: rgba(217, 70, 239, 0.1); }
                .card-link {
                    color: #04a45b;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .workflow-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .workflow-visual {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #0F121C;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .step-mock {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #1A1F2E;
                }
                .step-mock.dim {
                    opacity: 0.5;
                }
                .step-mock.active {
                    border: 1px solid rgba(4, 164, 91, 0.3);
                }
                .step-dot {
                    flex: none;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #334155;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: white;
                }
                .step-mock.active .step-dot {
                    background: #04a45b;
                }
                .timeline {
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    padding-left: 2rem;
                    margin-left: 1rem;
                }
                .timeline-step h4 {
                    font-size: 1.25rem;
                    color: white;
                    margin-bottom: 0.5rem;
                }
                .timeline-step p {
                    color: #94a3b8;
                    max-width: 28rem;
                    line-height: 1.6;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .plan {
                    position: relative;
                    overflow: hidden;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(19, 23, 34, 0.4);
                }
                .plan.pro {
                    border-color: rgba(4, 164, 91, 0.5);
                    background: rgba(19, 23, 34, 0.8);
                }
                .plan h3, .price {
                    color: white;
                }
                .price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .price span {
                    font-size: 1.125rem;
                    color: #64748b;
                    font-weight: 400;
                }
                .plan-blurb {
                    color: #94a3b8;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .plan ul {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 2rem;
                    line-height: 2.2;
                }
                .early-bird {
                    position: absolute;
                    top: 0;
                    right: 0;
                    padding: 0.5rem 1rem;
                    border-bottom-left-radius: 0.75rem;
                    background: #04a45b;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .plan-cta {
                    display: block;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: white;
                    font-weight: 700;
                    text-align: center;
                }
                .plan-cta.primary {
                    background: #04a45b;
                    border: none;
                }
                .closing-box {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 6rem;
                    border-radius: 3rem;
                    text-align: center;
                    background: linear-gradient(180deg, #1A1F2E, #0B0F19);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .closing-box p {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                }
                .closing-button {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 0.75rem;
                    background: white;
                    color: #020617;
                    font-weight: 700;
                    font-size: 1.125rem;
                }
                .footer {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: #020408;
                    padding: 4rem 1.5rem;
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    gap: 3rem;
                }
                .footer-brand {
                    max-width: 20rem;
                }
                .footer-brand p, .footer ul {
                    color: #64748b;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .footer-columns {
                    display: flex;
                    gap: 4rem;
                }
                .footer h4 {
                    color: white;
                }
                .footer ul {
                    list-style: none;
                    padding: 0;
                }
                .footer a:hover {
                    color: #04a45b;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 4rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: center;
                    color: #475569;
                    font-size: 0.875rem;
                }

                @media (max-width: 768px) {
                    .nav-links, .nav-actions, .mock-sidebar {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .hero {
                        padding-top: 8rem;
                    }
                    .hero-title {
                        font-size: 3rem;
                    }
                    .hero-cta-group, .footer-inner {
                        flex-direction: column;
                    }
                    .feature-grid, .workflow-grid, .pricing-grid, .mock-panels {
                        grid-template-columns: 1fr;
                    }
                    .workflow-visual {
                        order: 2;
                    }
                    .closing-box {
                        padding: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

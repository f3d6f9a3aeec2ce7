use std::rc::Rc;

use folio_core::catalog::{
    self, Certificate, Job, Project, CERTIFICATES, EDUCATION, INTERESTS, JOBS, PROFILE, PROJECTS,
    SKILLS, SOCIAL_LINKS,
};
use folio_core::scatter::{floating_shapes, FloatingShape, HERO_SHAPE_COUNT, HERO_SHAPE_SEED};
use folio_core::{AboutTab, ContactForm, ScrollSample, Section, ViewAction, ViewState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::app_config;
use crate::boot::{self, BootStage};
use crate::contact_runtime;
use crate::icons::{icon, section_icon, social_icon, Icon};
use crate::reveal_runtime::{RevealController, REVEAL_CLASS};
use crate::scroll_runtime::ScrollWatcher;
use crate::theme_store;

#[derive(Clone, PartialEq)]
struct ViewModel(ViewState);

impl Reducible for ViewModel {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ViewModel(self.0.reduce(action)))
    }
}

fn theme_label(dark: bool) -> &'static str {
    if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

fn theme_button(dark: bool, onclick: Callback<MouseEvent>, class: &'static str) -> Html {
    let label = theme_label(dark);
    html! {
        <button
            type="button"
            class={classes!("icon-button", class)}
            title={label}
            aria-label={label}
            {onclick}
        >
            { icon(if dark { Icon::Sun } else { Icon::Moon }, "icon-md") }
        </button>
    }
}

fn social_row(icon_class: &'static str) -> Html {
    html! {
        <div class="social-row">
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    key={link.label}
                    href={link.href}
                    class="social-link"
                    title={link.label}
                    aria-label={link.label}
                >
                    { icon(social_icon(link.icon), icon_class) }
                </a>
            }) }
        </div>
    }
}

fn brand(size_class: &'static str) -> Html {
    html! {
        <div class="brand">
            <div class={classes!("brand-mark", size_class)}>{ PROFILE.initials }</div>
            <span class="brand-name">{ PROFILE.name }</span>
        </div>
    }
}

fn sidebar(view: &ViewState, on_theme: Callback<MouseEvent>, on_nav: Callback<Section>) -> Html {
    let nav_items = Section::ALL.iter().map(|section| {
        let section = *section;
        let onclick = {
            let on_nav = on_nav.clone();
            Callback::from(move |_event: MouseEvent| on_nav.emit(section))
        };
        let active = view.is_active(section);
        html! {
            <li key={section.id()}>
                <a
                    href={section.anchor()}
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then_some("true")}
                    {onclick}
                >
                    { icon(section_icon(section), "icon-md nav-icon") }
                    { section.label() }
                </a>
            </li>
        }
    });
    html! {
        <aside class={classes!("sidebar", view.menu_open.then_some("open"))}>
            <div class="sidebar-inner">
                <div class="sidebar-head">
                    { brand("brand-mark-lg") }
                    { theme_button(view.dark_mode, on_theme, "round") }
                </div>
                <nav class="sidebar-nav">
                    <ul>{ for nav_items }</ul>
                </nav>
                <div class="sidebar-foot">{ social_row("icon-md") }</div>
            </div>
        </aside>
    }
}

fn mobile_header(
    view: &ViewState,
    on_theme: Callback<MouseEvent>,
    on_menu: Callback<MouseEvent>,
) -> Html {
    let menu_label = if view.menu_open { "Close menu" } else { "Open menu" };
    html! {
        <header class="mobile-header">
            { brand("brand-mark-sm") }
            <div class="mobile-actions">
                { theme_button(view.dark_mode, on_theme, "round") }
                <button
                    type="button"
                    class="icon-button"
                    aria-label={menu_label}
                    aria-expanded={view.menu_open.to_string()}
                    onclick={on_menu}
                >
                    { icon(if view.menu_open { Icon::Close } else { Icon::Menu }, "icon-lg") }
                </button>
            </div>
        </header>
    }
}

fn progress_bar(value: f64, class: &'static str) -> Html {
    let value = value.clamp(0.0, 100.0);
    html! {
        <div
            class={classes!("progress", class)}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{value:.0}")}
        >
            <div class="progress-fill" style={format!("width: {value:.2}%;")} />
        </div>
    }
}

fn floating_shape(index: usize, shape: &FloatingShape) -> Html {
    let style = format!(
        "width: {size:.1}px; height: {size:.1}px; top: {top:.2}%; left: {left:.2}%; \
         --drift-x: {dx:.1}px; --drift-y: {dy:.1}px; --peak-scale: {scale:.2}; \
         animation-duration: {period:.2}s;",
        size = shape.size_px,
        top = shape.top_pct,
        left = shape.left_pct,
        dx = shape.drift_x_px,
        dy = shape.drift_y_px,
        scale = shape.peak_scale,
        period = shape.period_s,
    );
    html! { <div key={index} class="floating-shape" {style} /> }
}

fn home_section(view: &ViewState, shapes: &[FloatingShape]) -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-pattern" />
            <div class="hero-content">
                <div class="hero-intro">
                    <img
                        src={PROFILE.avatar}
                        alt={PROFILE.name}
                        width="150"
                        height="150"
                        class="avatar hero-avatar"
                    />
                    <h1 class="hero-title">{ PROFILE.name }</h1>
                    <p class="hero-tagline">{ PROFILE.tagline }</p>
                    <div class="hero-socials">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                key={link.label}
                                href={link.href}
                                class="icon-button outline round"
                                aria-label={link.label}
                            >
                                { icon(social_icon(link.icon), "icon-md") }
                            </a>
                        }) }
                    </div>
                    <a href={Section::Contact.anchor()} class="button button-light button-lg">
                        { "Get in touch" }
                    </a>
                </div>
                <div class={classes!("scroll-hint", (!view.scroll_hint_visible()).then_some("faded"))}>
                    { icon(Icon::ChevronDown, "icon-xl") }
                </div>
            </div>
            <div class="floating-layer" aria-hidden="true">
                { for shapes.iter().enumerate().map(|(index, shape)| floating_shape(index, shape)) }
            </div>
        </section>
    }
}

fn skills_panel() -> Html {
    html! {
        <div class="card">
            <div class="card-header"><h3 class="card-title">{ "Technical Skills" }</h3></div>
            <div class="card-body stack">
                { for SKILLS.iter().map(|skill| html! {
                    <div key={skill.name} class="skill">
                        <div class="skill-row">
                            <span class="skill-name">{ skill.name }</span>
                            <span class="muted">{ skill.rating }</span>
                        </div>
                        { progress_bar(f64::from(skill.level), "progress-sm") }
                    </div>
                }) }
            </div>
        </div>
    }
}

fn interests_panel() -> Html {
    html! {
        <div class="card">
            <div class="card-header"><h3 class="card-title">{ "Professional Interests" }</h3></div>
            <div class="card-body">
                <ul class="interest-grid">
                    { for INTERESTS.iter().map(|interest| html! {
                        <li key={*interest}><span class="badge">{ *interest }</span></li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

fn about_section(view: &ViewState, on_tab: Callback<AboutTab>) -> Html {
    let tab_button = |tab: AboutTab| {
        let selected = view.about_tab == tab;
        let onclick = {
            let on_tab = on_tab.clone();
            Callback::from(move |_event: MouseEvent| on_tab.emit(tab))
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", selected.then_some("selected"))}
                aria-selected={selected.to_string()}
                {onclick}
            >
                { tab.label() }
            </button>
        }
    };
    let panel = match view.about_tab {
        AboutTab::Skills => skills_panel(),
        AboutTab::Interests => interests_panel(),
    };
    html! {
        <section id={Section::About.id()} class="section section-plain">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ "About Me" }</h2>
                <div class="about-layout">
                    <div class={classes!("about-portrait", REVEAL_CLASS)}>
                        <img src={PROFILE.avatar} alt={PROFILE.name} width="200" height="200" />
                        <div class="portrait-overlay"><span>{ PROFILE.name }</span></div>
                    </div>
                    <div class="about-body">
                        <p class={classes!("lead", REVEAL_CLASS)}>{ PROFILE.bio }</p>
                        <div class={classes!("tabs", REVEAL_CLASS)}>
                            <div class="tab-list" role="tablist">
                                { tab_button(AboutTab::Skills) }
                                { tab_button(AboutTab::Interests) }
                            </div>
                            <div class="tab-panel" role="tabpanel">{ panel }</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn tag_badges(tags: &'static [&'static str]) -> Html {
    html! {
        <div class="badge-row">
            { for tags.iter().map(|tag| html! { <span class="badge">{ *tag }</span> }) }
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article key={project.title} class={classes!("card", "project-card", REVEAL_CLASS)}>
            <div class="project-media">
                <img src={project.image} alt={project.title} width="400" height="300" />
                <div class="media-overlay">
                    <button type="button" class="button button-secondary button-sm">
                        { "View Project" }
                    </button>
                </div>
            </div>
            <div class="card-body">
                <h3 class="card-heading">{ project.title }</h3>
                <p class="card-text">{ project.description }</p>
                { tag_badges(project.tags) }
                <div class="card-links">
                    <button type="button" class="link-button">
                        { "Details" }{ icon(Icon::ChevronRight, "icon-sm") }
                    </button>
                    <button type="button" class="link-button">
                        { "GitHub" }{ icon(Icon::ExternalLink, "icon-sm") }
                    </button>
                </div>
            </div>
        </article>
    }
}

fn portfolio_section() -> Html {
    html! {
        <section id={Section::Portfolio.id()} class="section section-muted">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ "My Projects" }</h2>
                <div class="grid grid-3">{ for PROJECTS.iter().map(project_card) }</div>
            </div>
        </section>
    }
}

fn job_card(index: usize, job: &Job) -> Html {
    html! {
        <div key={index} class={classes!("card", "resume-item", REVEAL_CLASS)}>
            <div class="card-body">
                <h4 class="resume-title">{ job.title }</h4>
                <p class="muted">{ format!("{} • {}", job.company, job.period) }</p>
                <ul class="bullets">
                    { for job.responsibilities.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </div>
        </div>
    }
}

fn resume_section() -> Html {
    html! {
        <section id={Section::Resume.id()} class="section section-plain">
            <div class="container narrow">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ "Resume" }</h2>
                <div class="resume-block">
                    <h3 class={classes!("subsection-title", REVEAL_CLASS)}>{ "Work Experience" }</h3>
                    <div class="stack-lg">
                        { for JOBS.iter().enumerate().map(|(index, job)| job_card(index, job)) }
                    </div>
                </div>
                <hr class="separator" />
                <div class="resume-block">
                    <h3 class={classes!("subsection-title", REVEAL_CLASS)}>{ "Education" }</h3>
                    { for EDUCATION.iter().map(|entry| html! {
                        <div key={entry.degree} class={classes!("card", "resume-item", REVEAL_CLASS)}>
                            <div class="card-body">
                                <h4 class="resume-title">{ entry.degree }</h4>
                                <p class="muted">{ format!("{} • {}", entry.school, entry.period) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn certificate_card(index: usize, cert: &Certificate, on_open: Callback<usize>) -> Html {
    let onclick = Callback::from(move |_event: MouseEvent| on_open.emit(index));
    html! {
        <button
            key={index}
            type="button"
            class={classes!("card", "certificate-card", REVEAL_CLASS)}
            {onclick}
        >
            <div class="card-body certificate-body">
                <div class="corner-ribbon" />
                <h3 class="card-heading">{ cert.name }</h3>
                <p class="muted">{ format!("Issued by: {}", cert.issuer) }</p>
                <p class="muted">{ format!("Date: {}", cert.date) }</p>
                <span class="link-button">
                    { "View Certificate" }{ icon(Icon::ExternalLink, "icon-sm") }
                </span>
            </div>
        </button>
    }
}

fn certificate_dialog(index: Option<usize>, on_close: Callback<MouseEvent>) -> Html {
    let Some(cert) = index.and_then(catalog::certificate) else {
        return html! {};
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());
    html! {
        <div class="dialog-backdrop" onclick={on_close.clone()}>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="certificate-dialog-title"
                onclick={stop}
            >
                <button type="button" class="icon-button dialog-close" aria-label="Close" onclick={on_close}>
                    { icon(Icon::Close, "icon-sm") }
                </button>
                <div class="dialog-header">
                    <h3 id="certificate-dialog-title" class="dialog-title">{ cert.name }</h3>
                    <p class="muted">{ "Certificate details" }</p>
                </div>
                <div class="dialog-body">
                    <img src={cert.image} alt={cert.name} width="800" height="600" class="certificate-image" />
                    <dl class="detail-grid">
                        <dt>{ "Issuer" }</dt>
                        <dd>{ cert.issuer }</dd>
                        <dt>{ "Date" }</dt>
                        <dd>{ cert.date }</dd>
                    </dl>
                </div>
            </div>
        </div>
    }
}

fn certificates_section(on_open: Callback<usize>) -> Html {
    html! {
        <section id={Section::Certificates.id()} class="section section-muted">
            <div class="container">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ "Certificates" }</h2>
                <div class="grid grid-3">
                    { for CERTIFICATES.iter().enumerate().map(|(index, cert)| {
                        certificate_card(index, cert, on_open.clone())
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Default, PartialEq)]
struct ContactRefs {
    name: NodeRef,
    email: NodeRef,
    subject: NodeRef,
    message: NodeRef,
}

impl ContactRefs {
    fn read(&self) -> ContactForm {
        let input = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
        };
        let message = self
            .message
            .cast::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default();
        ContactForm::new(input(&self.name), input(&self.email), input(&self.subject), message)
    }
}

fn contact_section(refs: &ContactRefs, onsubmit: Callback<SubmitEvent>) -> Html {
    html! {
        <section id={Section::Contact.id()} class="section section-plain">
            <div class="container narrow">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ "Get in Touch" }</h2>
                <div class={classes!("card", REVEAL_CLASS)}>
                    <div class="card-body roomy">
                        <form class="contact-form" novalidate={true} {onsubmit}>
                            <div class="form-row">
                                <div class="field">
                                    <label for="name">{ "Name" }</label>
                                    <input id="name" name="name" class="input" ref={refs.name.clone()} />
                                </div>
                                <div class="field">
                                    <label for="email">{ "Email" }</label>
                                    <input id="email" name="email" type="email" class="input" ref={refs.email.clone()} />
                                </div>
                            </div>
                            <div class="field">
                                <label for="subject">{ "Subject" }</label>
                                <input id="subject" name="subject" class="input" ref={refs.subject.clone()} />
                            </div>
                            <div class="field">
                                <label for="message">{ "Message" }</label>
                                <textarea id="message" name="message" rows="4" class="input" ref={refs.message.clone()} />
                            </div>
                            <button type="submit" class="button button-gradient button-block">
                                { "Send Message" }{ icon(Icon::Send, "icon-sm") }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p>{ format!("© {} {}. All rights reserved.", PROFILE.copyright_year, PROFILE.name) }</p>
                { social_row("icon-lg") }
            </div>
        </footer>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = use_memo((), |_| app_config::site_config());
    let theme = use_mut_ref({
        let key = config.theme_storage_key.clone();
        move || {
            boot::enter(BootStage::Theme);
            theme_store::open_page_theme(&key)
        }
    });
    let view = use_reducer_eq({
        let dark = theme.borrow().is_dark();
        let config = config.clone();
        move || ViewModel(ViewState::new(dark, &config))
    });
    let shapes = use_memo((), |_| floating_shapes(HERO_SHAPE_SEED, HERO_SHAPE_COUNT));
    let contact_refs = use_memo((), |_| ContactRefs::default());
    let state = &view.0;

    {
        let theme = theme.clone();
        use_effect_with(state.dark_mode, move |dark| {
            theme_store::set_page_theme(&mut theme.borrow_mut(), *dark);
            || ()
        });
    }
    {
        let dispatcher = view.dispatcher();
        use_effect_with((), move |_| {
            let watcher = ScrollWatcher::install(Rc::new(move |sample: ScrollSample| {
                dispatcher.dispatch(ViewAction::Scrolled(sample));
            }));
            if watcher.is_none() {
                gloo::console::warn!("scroll: window unavailable, progress tracking disabled");
            }
            move || drop(watcher)
        });
    }
    {
        let reveal = config.reveal.clone();
        use_effect_with((), move |_| {
            boot::enter(BootStage::Reveal);
            let controller = RevealController::install(reveal, &Section::ALL);
            match &controller {
                None => gloo::console::warn!("reveal: window unavailable, sections shown as-is"),
                Some(controller) if controller.is_settled() => {
                    gloo::console::log!("reveal: every region visible on mount")
                }
                Some(_) => {}
            }
            boot::enter(BootStage::Ready);
            move || drop(controller)
        });
    }
    {
        let dispatcher = view.dispatcher();
        use_effect_with(state.open_certificate.is_some(), move |open| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .filter(|_| *open)
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if is_escape {
                            dispatcher.dispatch(ViewAction::CloseCertificate);
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let on_theme = {
        let view = view.clone();
        Callback::from(move |_event: MouseEvent| view.dispatch(ViewAction::ToggleTheme))
    };
    let on_menu = {
        let view = view.clone();
        Callback::from(move |_event: MouseEvent| view.dispatch(ViewAction::ToggleMenu))
    };
    let on_nav = {
        let view = view.clone();
        Callback::from(move |section: Section| view.dispatch(ViewAction::NavItemActivated(section)))
    };
    let on_tab = {
        let view = view.clone();
        Callback::from(move |tab: AboutTab| view.dispatch(ViewAction::SelectTab(tab)))
    };
    let on_open_certificate = {
        let view = view.clone();
        Callback::from(move |index: usize| view.dispatch(ViewAction::OpenCertificate(index)))
    };
    let on_close_certificate = {
        let view = view.clone();
        Callback::from(move |_event: MouseEvent| view.dispatch(ViewAction::CloseCertificate))
    };
    let on_submit = {
        let refs = contact_refs.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let _ = contact_runtime::handle_submit(&refs.read());
        })
    };

    html! {
        <div class="page">
            { sidebar(state, on_theme.clone(), on_nav) }
            <div class="page-main">
                { mobile_header(state, on_theme, on_menu) }
                <div class="scroll-progress">{ progress_bar(state.scroll_progress, "progress-xs") }</div>
                <main class="content">
                    { home_section(state, &shapes) }
                    { about_section(state, on_tab) }
                    { portfolio_section() }
                    { resume_section() }
                    { certificates_section(on_open_certificate) }
                    { contact_section(&contact_refs, on_submit) }
                </main>
                { footer() }
            </div>
            { certificate_dialog(state.open_certificate, on_close_certificate) }
        </div>
    }
}

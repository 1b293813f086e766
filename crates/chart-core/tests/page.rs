// File: crates/chart-core/tests/page.rs
// Purpose: Sidebar transitions, mount points and frame sizing.

use chart_core::{Frame, Page, SidebarIntent, SidebarState};

#[test]
fn sidebar_transitions() {
    use SidebarIntent::*;
    assert_eq!(SidebarState::Open.transition(Collapse), SidebarState::Collapsed);
    assert_eq!(SidebarState::Collapsed.transition(Collapse), SidebarState::Collapsed);
    assert_eq!(SidebarState::Collapsed.transition(Dismiss), SidebarState::Open);
    assert_eq!(SidebarState::Collapsed.transition(OverlayClick), SidebarState::Open);
    assert_eq!(SidebarState::Open.transition(Dismiss), SidebarState::Open);
}

#[test]
fn collapsed_sidebar_classes() {
    assert_eq!(SidebarState::Collapsed.sidebar_class(), Some("inactive"));
    assert_eq!(SidebarState::Collapsed.overlay_class(), Some("active"));
    assert_eq!(SidebarState::Open.sidebar_class(), None);
    assert_eq!(SidebarState::Open.overlay_class(), None);
}

#[test]
fn page_html_reflects_sidebar_and_mounts() {
    let mut page = Page::new("Desk & Co").with_container("#main-display-visual");
    page.mount("main-display-visual").unwrap().present("<svg></svg>".into());
    assert_eq!(page.apply(SidebarIntent::Collapse), SidebarState::Collapsed);

    let html = page.to_html();
    assert!(html.contains("<title>Desk &amp; Co</title>"));
    assert!(html.contains(r#"class="sidebar inactive""#));
    assert!(html.contains(r#"class="overlay active""#));
    assert!(html.contains(r#"<div id="main-display-visual"><svg></svg></div>"#));

    page.apply(SidebarIntent::OverlayClick);
    assert!(page.to_html().contains(r#"<nav id="sidebar" class="sidebar">"#));
}

#[test]
fn mount_clones_share_content() {
    let page = Page::new("p").with_container("a");
    let m1 = page.mount("#a").unwrap();
    let m2 = page.mount("a").unwrap();
    assert!(m2.snapshot().is_none());
    m1.present("one".into());
    assert_eq!(m2.snapshot().as_deref(), Some("one"));
}

#[test]
fn frame_from_viewport() {
    let f = Frame::from_viewport(1200.0, 1600.0, 900.0);
    assert_eq!(f, Frame::new(900.0, 506.25));
    let g = Frame::from_viewport(400.0, 800.0, 600.0);
    assert_eq!(g, Frame::new(400.0, 300.0));
    assert_eq!(Frame::from_viewport(400.0, 0.0, 600.0).height, 0.0);
}

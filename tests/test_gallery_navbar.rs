mod common;

use anyhow::Result;
use common::*;
use folio::core::{
    gallery::ProjectGallery,
    nav::{MOBILE_BREAKPOINT, NavbarState},
};

#[test]
fn test_gallery_steps_wrap_around() -> Result<()> {
    let projects = sample_projects();
    let mut gallery = ProjectGallery::default();
    assert!(!gallery.is_open());

    // 1. Stepping while closed does nothing
    gallery.next(&projects);
    assert!(gallery.selected(&projects).is_none());

    // 2. Open the last project and step forward
    gallery.open(4);
    gallery.next(&projects);
    assert_eq!(gallery.selected(&projects).map(|p| p.id), Some(1));

    // 3. Step back past the start
    gallery.previous(&projects);
    assert_eq!(gallery.selected(&projects).map(|p| p.id), Some(4));
    gallery.previous(&projects);
    assert_eq!(gallery.selected(&projects).map(|p| p.id), Some(3));

    // 4. Close
    gallery.close();
    assert!(!gallery.is_open());

    Ok(())
}

#[test]
fn test_gallery_unknown_project_closes() -> Result<()> {
    let projects = sample_projects();
    let mut gallery = ProjectGallery::default();

    gallery.open(99);
    assert!(gallery.is_open());
    assert!(gallery.selected(&projects).is_none());

    gallery.next(&projects);
    assert!(!gallery.is_open());

    Ok(())
}

#[test]
fn test_navbar_menu_lifecycle() -> Result<()> {
    let mut navbar = NavbarState::default();

    navbar.toggle_menu();
    assert!(navbar.menu_open());

    // 1. Navigation closes the menu and holds the scroll lock
    assert_eq!(navbar.nav_clicked(SectionId::Projects), SectionId::Projects);
    assert!(!navbar.menu_open());
    assert!(navbar.scrolling_to_section());
    navbar.release_scroll_lock();
    assert!(!navbar.scrolling_to_section());

    // 2. Escape closes it
    navbar.toggle_menu();
    navbar.escape_pressed();
    assert!(!navbar.menu_open());

    // 3. Resizing stays open on mobile, closes on desktop
    navbar.toggle_menu();
    navbar.resized(MOBILE_BREAKPOINT - 1.0);
    assert!(navbar.menu_open());
    navbar.resized(MOBILE_BREAKPOINT);
    assert!(!navbar.menu_open());

    Ok(())
}

#[test]
fn test_navbar_scroll_progress() -> Result<()> {
    let mut navbar = NavbarState::default();

    navbar.scrolled_to(10.0, 2000.0, 1000.0);
    assert!(!navbar.scrolled());
    assert!((navbar.progress() - 0.01).abs() < 1e-6);

    navbar.scrolled_to(500.0, 2000.0, 1000.0);
    assert!(navbar.scrolled());
    assert!((navbar.progress() - 0.5).abs() < 1e-6);

    navbar.scrolled_to(5000.0, 2000.0, 1000.0);
    assert_eq!(navbar.progress(), 1.0);

    // Content shorter than the viewport never divides by zero
    navbar.scrolled_to(0.0, 500.0, 1000.0);
    assert_eq!(navbar.progress(), 0.0);

    Ok(())
}

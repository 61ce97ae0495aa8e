//! Scripted session through the folio interaction engine.
//!
//! Stands in for the render layer: builds the stores, subscribes the way a
//! render tree would, then replays a plausible visit — theme fiddling, a
//! bit of navigation on a phone-sized viewport, and a few clicks on the
//! greeting. Run with `RUST_LOG=debug` to see the internal transitions.

use std::rc::Rc;

use folio_core::Scope;
use folio_home::{Sequencer, new_content};
use folio_nav::{NavShell, link_style, mobile_links};
use folio_theme::{Accent, FileStorage, MemoryStorage, Storage, ThemeStore};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let storage: Rc<dyn Storage> = match FileStorage::open_default() {
        Some(fs) => Rc::new(fs),
        None => {
            log::warn!("no data directory; preferences will not survive this session");
            Rc::new(MemoryStorage::default())
        }
    };
    let theme = Rc::new(ThemeStore::new(storage));
    let shell = Rc::new(NavShell::new("/"));
    let sequencer = Sequencer::new();

    // What a render tree does implicitly: recompose on every store change.
    {
        let theme2 = theme.clone();
        theme
            .mode_signal()
            .subscribe(move |m| println!("[render] color mode {:?}, links {:?}", m, theme2.link_color()));
        let theme2 = theme.clone();
        theme
            .accent_signal()
            .subscribe(move |a| println!("[render] accent {:?}, links {:?}", a, theme2.link_color()));
        shell
            .disclosure
            .open_signal()
            .subscribe(|open| println!("[render] mobile panel open: {open}"));
        shell
            .router
            .path_signal()
            .subscribe(|p| println!("[render] route {p}"));
    }

    println!("-- session start: {:?} / {:?}", theme.color_mode(), theme.accent());

    theme.toggle_color_mode();
    theme.set_accent_color(Accent::Purple.strong())?;

    // Mobile visit: open the menu, tap Blog; the panel closes itself.
    shell.disclosure.toggle();
    shell.activate("/blog");

    for link in mobile_links() {
        let style = link_style(&link, &shell.router.path(), theme.color_mode(), theme.link_color());
        println!("[nav] {:<12} {:?}", link.name, style.outline);
    }

    // The greeting gets a flurry of clicks; ticks are pumped by the host.
    let page = Scope::new();
    page.run(|| sequencer.mount());
    for _ in 0..4 {
        sequencer.trigger();
        match sequencer.visible_symbol() {
            Some(s) => println!("[home] reaction {s}"),
            None => println!("[home] reaction pending wrap (index {})", sequencer.index()),
        }
    }
    sequencer.tick();
    println!("[home] after tick: {:?}", sequencer.visible_symbol());
    page.dispose();

    for entry in new_content() {
        let tag = if entry.show_new_tag { " [new]" } else { "" };
        println!("[home] {} -> {}{tag}", entry.text, entry.link);
    }

    println!("-- session end: {:?} / {:?}", theme.color_mode(), theme.accent());
    Ok(())
}

//! Screen switching example.
//!
//! Builds a four-column form, attaches a responsive controller and walks it
//! through the default, tablet and mobile screens, printing the grid after
//! each change.
//!
//! Run with: RUST_LOG=horizon_reflow=debug cargo run -p horizon-reflow --example screen_switch

use std::sync::Arc;

use horizon_reflow::attributes::names;
use horizon_reflow::layout::{Constraint, Division, FormLayout};
use horizon_reflow::responsive::{GridDump, HostBus, HostEvents, attach};
use horizon_reflow::{Child, Container, EngineConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut form = Container::new(FormLayout::with_tracks(
        vec![Division::fixed(120.0); 4],
        vec![Division::fixed(28.0); 3],
    ))
    .with_attr(names::TABLET_COLUMN_COUNT, "2")
    .with_attr(names::MOBILE_COLUMN_COUNT, "1")
    .with_attr(names::MOBILE_H_MARGIN, "4");

    for (row, label) in ["name", "email", "phone"].into_iter().enumerate() {
        form.add_child(
            Child::new(format!("{label}Label")).with_class("label"),
            Constraint::at(row, 0),
        );
        form.add_child(Child::new(label), Constraint::spanning(row, 1, 1, 2));
    }
    form.add_child(
        Child::new("notes").with_attr(names::NEEDS_AUTO_HEIGHT, "true"),
        Constraint::spanning(0, 3, 3, 1),
    );
    form.add_child(
        Child::new("btnSearch"),
        Constraint::at(2, 3).with_width(90.0),
    );

    let container = form.into_shared();
    let bus = Arc::new(HostBus::new());
    let events: Arc<dyn HostEvents> = bus.clone();
    let config = Arc::new(EngineConfig::default().with_action_control_prefix("btnSearch"));
    let controller = attach(&container, events, config).expect("form declares column counts");

    for screen in ["default", "tablet", "mobile", "default"] {
        bus.set_active_screen(screen);
        bus.run_deferred();
        println!("== {screen} ==");
        println!("{}", GridDump::new(&container.lock()));
    }

    controller.stop();
}

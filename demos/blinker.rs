//! Blinking LED Controller
//!
//! This example embeds a state machine inside an application structure.
//!
//! Key concepts:
//! - Composition: the `Fsm` is a field of the controller it drives
//! - A `static` transition table shared by every controller
//! - Guards reading, and actions writing, the controller's own fields
//! - Checkpointing the state across a simulated reset
//!
//! Run with: RUST_LOG=tablefsm=trace cargo run --example blinker

use tablefsm::checkpoint::Checkpoint;
use tablefsm::core::Transition;
use tablefsm::engine::{Fsm, Machine};
use tablefsm::transition_table;
use tracing_subscriber::EnvFilter;

const IDLE: i32 = 0;
const LED_ON: i32 = 1;
const LED_OFF: i32 = 2;

struct Blinker {
    fsm: Fsm<'static, Blinker>,
    enabled: bool,
    ticks: u32,
    period: u32,
    led: bool,
    toggles: u32,
}

impl Machine<'static> for Blinker {
    fn fsm(&self) -> &Fsm<'static, Self> {
        &self.fsm
    }

    fn fsm_mut(&mut self) -> &mut Fsm<'static, Self> {
        &mut self.fsm
    }
}

fn enabled(b: &Blinker) -> bool {
    b.enabled
}

fn disabled(b: &Blinker) -> bool {
    !b.enabled
}

fn period_elapsed(b: &Blinker) -> bool {
    b.enabled && b.ticks >= b.period
}

fn led_on(b: &mut Blinker) {
    b.led = true;
    b.ticks = 0;
    b.toggles += 1;
}

fn led_off(b: &mut Blinker) {
    b.led = false;
    b.ticks = 0;
    b.toggles += 1;
}

static BLINKER: [Transition<Blinker>; 6] = transition_table![
    (IDLE, enabled, LED_ON, led_on),
    (LED_ON, disabled, IDLE, led_off),
    (LED_ON, period_elapsed, LED_OFF, led_off),
    (LED_OFF, disabled, IDLE),
    (LED_OFF, period_elapsed, LED_ON, led_on),
];

impl Blinker {
    fn new(period: u32) -> Result<Self, tablefsm::FsmError> {
        Ok(Blinker {
            fsm: Fsm::new(&BLINKER)?,
            enabled: false,
            ticks: 0,
            period,
            led: false,
            toggles: 0,
        })
    }

    fn tick(&mut self) {
        self.ticks += 1;
        self.fire();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Blinking LED Controller ===\n");

    let mut blinker = Blinker::new(3)?;
    println!("Initial state: {}", blinker.state());

    blinker.enabled = true;
    for tick in 1..=10 {
        blinker.tick();
        println!(
            "  tick {:>2}: state={} led={}",
            tick,
            blinker.state(),
            if blinker.led { "on" } else { "off" }
        );
    }

    let saved = Checkpoint::capture(&blinker).to_json()?;
    println!("\nCheckpoint: {}", saved);

    let mut rebooted = Blinker::new(3)?;
    rebooted.enabled = true;
    Checkpoint::from_json(&saved)?.restore(&mut rebooted)?;
    println!("State after reset and restore: {}", rebooted.state());

    blinker.enabled = false;
    blinker.tick();
    println!("\nDisabled: state={} toggles={}", blinker.state(), blinker.toggles);

    println!("\n=== Example Complete ===");
    Ok(())
}

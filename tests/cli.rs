use std::process::Command as Process;

use jz_gpio::cli::Invocation;
use jz_gpio::layout::Register;
use jz_gpio::{Pin, PortId, SimulatedRegisters};

fn jz_gpio(regs: &mut SimulatedRegisters, args: &[&str]) -> String {
    let mut out = Vec::new();
    Invocation::parse(args)
        .unwrap()
        .run(regs, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn show_line(regs: &mut SimulatedRegisters, pin: &str) -> String {
    let listing = jz_gpio(regs, &["show"]);
    listing
        .lines()
        .find(|line| line.starts_with(&format!("{pin}:")))
        .unwrap()
        .to_owned()
}

#[test]
fn configure_and_show() {
    let mut regs = SimulatedRegisters::new();

    jz_gpio(&mut regs, &["pb10", "gpio_output"]);
    jz_gpio(&mut regs, &["pb10", "write", "1"]);
    assert_eq!(show_line(&mut regs, "PB10"), "PB10: GPIO OUTPUT 1");
    assert_eq!(jz_gpio(&mut regs, &["pb10", "read"]), "1\n");

    jz_gpio(&mut regs, &["pb10", "func", "3"]);
    assert_eq!(show_line(&mut regs, "PB10"), "PB10: FUNCTION 3");

    jz_gpio(&mut regs, &["pb10", "int", "1"]);
    assert_eq!(show_line(&mut regs, "PB10"), "PB10: INTERRUPT RISING_EDGE ENABLED");
    jz_gpio(&mut regs, &["pb10", "msk", "1"]);
    jz_gpio(&mut regs, &["pb10", "pat1", "0"]);
    assert_eq!(show_line(&mut regs, "PB10"), "PB10: INTERRUPT HIGH_LEVEL DISABLED");

    jz_gpio(&mut regs, &["pb10", "gpio_input"]);
    regs.drive_input(Pin::new(PortId::B, 10).unwrap(), true);
    assert_eq!(show_line(&mut regs, "PB10"), "PB10: GPIO INPUT 1");

    // Only PB10 was ever touched
    for port in PortId::ALL {
        let expected = if port == PortId::B { 1 << 10 } else { 0 };
        assert_eq!(regs.peek(port, Register::Msk), expected, "port {port}");
    }
}

#[test]
fn show_lists_every_pin() {
    let mut regs = SimulatedRegisters::new();
    let listing = jz_gpio(&mut regs, &["show"]);

    let pins: Vec<&str> = listing.lines().filter(|l| l.starts_with('P') && l.contains(':')).collect();
    assert_eq!(pins.len(), 7 * 32);
    assert_eq!(pins[0], "PA00: FUNCTION 0");
    assert_eq!(pins[7 * 32 - 1], "PG31: FUNCTION 0");

    let headers: Vec<&str> = listing.lines().filter(|l| l.starts_with("Port ")).collect();
    assert_eq!(headers, ["Port A", "Port B", "Port C", "Port D", "Port E", "Port F", "Port G"]);
}

fn exit_status(args: &[&str]) -> (i32, String, String) {
    let output = Process::new(env!("CARGO_BIN_EXE_jz_gpio"))
        .args(args)
        .env("JZ_GPIO_DEVICE", "/nonexistent/jz-gpio-mem")
        .output()
        .unwrap();
    (
        output.status.code().unwrap(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn exit_codes() {
    let (code, stdout, _) = exit_status(&[]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("Usage:"));

    let (code, stdout, _) = exit_status(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Usage:"));

    let (code, _, stderr) = exit_status(&["PZ00", "read"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Bad pin specification `PZ00'"));

    let (code, _, stderr) = exit_status(&["PA00"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("no command specified"));

    let (code, _, stderr) = exit_status(&["PA00", "write"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("value not specified"));

    let (code, _, stderr) = exit_status(&["PA00", "blink"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("Bad command `blink'"));

    // Valid invocation, but the register window cannot be mapped
    let (code, _, stderr) = exit_status(&["show"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("failed to open"));
}

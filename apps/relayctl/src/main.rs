//! Diagnostic bench tool: drives the relay hardware or reads the sensor
//! directly through `thermostat-core::hal`, bypassing the control engine
//! entirely. Argv vocabulary merges the teacher's `apps/enable` (parse a
//! small set of named commands from argv, send one message) and
//! `apps/udp-test` (toggle a relay, sleep, toggle back) into one tool.

use std::env;
use std::time::Duration;

use anyhow::{bail, Result};

use thermostat_core::config::Config;
use thermostat_core::hal;
use thermostat_core::model::RelayMode;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("Usage: relayctl <config-path> <off|fan_only|cool|heat|emergency|toggle|read>");
    }
    let config = Config::load(&args[1])?;
    let relay_commands = config.relay_commands.parse()?;
    let backend = hal::probe(&config).await?;
    println!("using backend: {}", backend.name());

    match args[2].as_str() {
        "off" => backend.write_relay(RelayMode::Off, &relay_commands.off).await,
        "fan_only" => backend.write_relay(RelayMode::FanOnly, &relay_commands.fan_only).await,
        "cool" => backend.write_relay(RelayMode::Cool, &relay_commands.cool).await,
        "heat" => backend.write_relay(RelayMode::Heat, &relay_commands.heat).await,
        "emergency" => backend.write_relay(RelayMode::Emergency, &relay_commands.emergency).await,
        "toggle" => {
            println!("cool on");
            backend.write_relay(RelayMode::Cool, &relay_commands.cool).await;
            tokio::time::sleep(Duration::from_secs(1)).await;
            println!("off");
            backend.write_relay(RelayMode::Off, &relay_commands.off).await;
        }
        "read" => match backend.read_sensor().await {
            Some((temp, humidity)) => println!("temperature={temp:.2} humidity={humidity:.2}"),
            None => println!("sensor read failed"),
        },
        other => bail!("Unknown command: {other}"),
    }

    backend.cleanup().await;
    Ok(())
}

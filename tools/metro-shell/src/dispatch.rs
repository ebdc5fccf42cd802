use metro_network::{MetroNetwork, NetworkError, StationName};

use crate::command::{Command, HELP};

/// What the shell should do after running a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print
    Output(Vec<String>),
    /// The network rejected the command; state is unchanged
    Failed(NetworkError),
    Exit,
}

/// Apply one command to the network and describe the result.
pub fn dispatch(network: &mut MetroNetwork, command: Command) -> Reply {
    log::debug!("dispatching {:?}", command);

    let result = match command {
        Command::AddStation(name) => network
            .add_station(name.as_str())
            .map(|_| vec![format!("Station {} added to the metro network.", name)]),
        Command::RemoveStation(name) => network
            .remove_station(&name)
            .map(|_| vec![format!("Station {} removed from the metro network.", name)]),
        Command::Connect { a, b, weight } => network.add_connection(&a, &b, weight).map(|_| {
            vec![format!(
                "Connection between {} and {} added to the metro network.",
                a, b
            )]
        }),
        Command::Disconnect { a, b } => network
            .remove_connection(&a, &b)
            .map(|_| vec![format!("Connection between {} and {} removed.", a, b)]),
        Command::Fare { from, to } => network.fare_between(&from, &to).map(|fare| {
            vec![format!(
                "The fare between stations {} and {} is ${}.",
                from, to, fare
            )]
        }),
        Command::List => Ok(vec![station_line(&network.list_stations())]),
        Command::Show => Ok(network
            .dump_network()
            .iter()
            .map(ToString::to_string)
            .collect()),
        Command::Neighbors(name) => network.neighbors(&name).map(|neighbors| {
            neighbors
                .into_iter()
                .map(|(neighbor, weight)| format!("{} -> {} ({} units)", name, neighbor, weight))
                .collect()
        }),
        Command::Help => Ok(HELP.iter().map(|line| line.to_string()).collect()),
        Command::Exit => return Reply::Exit,
    };

    match result {
        Ok(lines) => Reply::Output(lines),
        Err(err) => Reply::Failed(err),
    }
}

fn station_line(stations: &[StationName]) -> String {
    let names: Vec<&str> = stations.iter().map(StationName::as_str).collect();
    format!("Stations: {}", names.join(" "))
}

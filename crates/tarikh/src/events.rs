use tabwheel::Route;
use tabwheel::ipc::ControlCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Show,
    Hide,
    /// The location changed outside the tab bar.
    Goto(Route),
    Select(usize),
    ConfigReload,
}

impl From<ControlCommand> for AppEvent {
    fn from(cmd: ControlCommand) -> Self {
        match cmd {
            ControlCommand::Show => AppEvent::Show,
            ControlCommand::Hide => AppEvent::Hide,
            ControlCommand::Goto(route) => AppEvent::Goto(route),
            ControlCommand::Select(index) => AppEvent::Select(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_commands_map_to_events() {
        let cases = vec![
            ("show", AppEvent::Show),
            ("hide", AppEvent::Hide),
            ("goto /(tabs)/map", AppEvent::Goto(Route::new("/(tabs)/map"))),
            ("select 1", AppEvent::Select(1)),
        ];

        for (line, expected) in cases {
            let cmd: ControlCommand = line.parse().unwrap();
            assert_eq!(AppEvent::from(cmd), expected);
        }
    }
}

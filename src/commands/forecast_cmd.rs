use crate::commands::base_commands::Commands;
use crate::services::forecast::forecast_from_history_file;

pub fn forecast_command(cmd: Commands) {
    if let Commands::Forecast {
        history,
        output,
        trials,
        months,
        free_users,
        paying_users,
        seed,
    } = cmd
    {
        let forecast = match forecast_from_history_file(
            &history,
            trials,
            months,
            free_users,
            paying_users,
            seed,
        ) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to run forecast: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&forecast) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize forecast output: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write forecast output: {e:?}");
        } else {
            println!("Forecast for {months} months written to {output}");
        }
    }
}

use shortuuid::{
    configuration::Configuration, create_server::create_server, error::Error, logger::Logger, state::State, Alphabet,
};
use std::{net::SocketAddr, process, sync::Arc};
use tokio::runtime::Runtime;

fn run(configuration: Configuration, logger: Logger) -> Result<(), Error> {
    let alphabet = Alphabet::new(configuration.alphabet());
    logger.log(format!(
        "Alphabet \"{}\" ({} symbols, {} symbols per UUID, {} bytes per symbol)",
        alphabet,
        alphabet.len(),
        alphabet.max_encoded_length(),
        alphabet.max_symbol_width()
    ));

    let state = Arc::new(State::new(alphabet));
    let server = create_server(state, logger);
    let address = SocketAddr::new(configuration.host(), configuration.port());

    let runtime = Runtime::new().map_err(|error| Error::new(format!("Could not start runtime: {}", error)))?;
    logger.log(format!("Listening on http://{}", address));
    runtime
        .block_on(server.run(address))
        .map_err(|error| Error::new(format!("Server error: {}", error)))
}

fn main() {
    let logger = Logger::new();
    let result = Configuration::new().and_then(|configuration| run(configuration, logger));
    if let Err(error) = result {
        eprintln!("{}", error);
        process::exit(1);
    }
}

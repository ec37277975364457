use querystash::{Location, OriginStorage, ParameterPersister, QueryStringReader};

// cargo run --example study_page -- 'https://study.example.com/hit?assignmentId=A1&workerId=W1'
fn main() {
    env_logger::init();

    let href = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://study.example.com/hit?assignmentId=A1&hitId=H1".to_string());

    let location = match Location::parse(&href) {
        Ok(location) => location,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let reader = QueryStringReader::new(location.clone());

    match reader.extract_parameters(None) {
        Ok(params) => {
            for (key, value) in params {
                println!("{key} = {value}");
            }
        }
        Err(e) => {
            println!("{e}");
            return;
        }
    }

    let mut storage = OriginStorage::new();
    let mut persister = ParameterPersister::new(&reader, Some(storage.for_origin(&location)));

    if let Err(e) = persister.save_known_task_parameters() {
        println!("{e}");
        return;
    }

    println!("{:?}", persister.load_task_assignment());
}

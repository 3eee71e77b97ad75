use log::info;
use rand::{distributions::Alphanumeric, Rng};
use std::env;
use switchstack::{Mode, Stack};

#[derive(Clone, Debug)]
struct Job {
    id: usize,
    name: String,
}

fn generate_jobs() -> Vec<Option<Job>> {
    let mut rng = rand::thread_rng();

    let mut jobs = Vec::new();

    for id in 0..20 {
        // Roughly one in five slots carries no job.
        if rng.gen_range(0..5) == 0 {
            jobs.push(None);
            continue;
        }
        let name: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        jobs.push(Some(Job { id, name }));
    }

    jobs
}

fn starting_mode() -> Mode {
    let requested = env::args()
        .nth(1)
        .or_else(|| env::var("SWITCHSTACK_MODE").ok());

    match requested {
        Some(name) => match name.parse() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("{e}, falling back to {}", Mode::default());
                Mode::default()
            }
        },
        None => Mode::default(),
    }
}

fn drain(stack: &mut Stack<Job>, limit: usize) {
    let mut counter = 0;
    while counter < limit {
        let Some(job) = stack.pop() else {
            break;
        };
        println!("[{}] job {:>2} : {}", stack.mode(), job.id, job.name);
        counter = counter + 1;
    }
}

fn main() {
    env_logger::init();

    let mut stack: Stack<Job> = Stack::with_mode(starting_mode());
    for job in generate_jobs() {
        stack.push(job);
    }
    info!("stack size : {}", stack.len());

    let snapshot = stack.to_vec();
    drain(&mut stack, 5);

    let mut mode = stack.mode();
    mode.toggle();
    stack.set_mode(mode);
    info!("switched to {}, {} jobs left", stack.mode(), stack.len());
    drain(&mut stack, usize::MAX);

    stack.replace_all(&snapshot);
    stack.reverse();
    if let Some(job) = stack.peek() {
        println!("after restore and reverse, next job is {}", job.id);
    }
    stack.clear();
    println!("stack size : {}", stack.len());
}

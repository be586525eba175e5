use std::{env, process::exit};

use eval::eval;
use log::info;
use typechecker::program_type;

mod demos;

fn main() {
    env_logger::init();
    match env::args().collect::<Vec<_>>().get(1) {
        Some(name) => match demos::find(name) {
            Some(p) => {
                match program_type(&p) {
                    Ok(t) => info!("Program {} has type {}", name, t),
                    Err(err) => {
                        eprintln!("Typing Error: {}", err);
                        exit(-1)
                    }
                }
                match eval(&p) {
                    Ok(v) => println!("> {}", v),
                    Err(err) => {
                        if err.is_recoverable() {
                            eprintln!("Cast Error: {}", err);
                        } else {
                            eprintln!("Runtime Error: {}", err);
                        }
                        exit(-1)
                    }
                }
            }
            None => {
                eprintln!("Unknown program '{}'.", name);
                print_usage();
                exit(1);
            }
        },
        None => {
            print_usage();
            exit(1);
        }
    };
}

fn print_usage() {
    println!("Please provide the name of a program to run:");
    for name in demos::NAMES {
        println!("  {}", name);
    }
}

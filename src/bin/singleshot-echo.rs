extern crate singleshot;
extern crate argparse;
extern crate env_logger;

use std::env;
use std::io::{Read, Write};

use argparse::{ArgumentParser, StoreTrue};

use singleshot::server::{SingleShot, Config, ParseStrategy, BodyPolicy};
use singleshot::server::{Environment, Response, HandlerError};


pub struct Options {
    pub incremental: bool,
    pub skip_post_put_body: bool,
}


fn echo(mut env: Environment) -> Result<Response, HandlerError> {
    let mut text = String::new();
    for (key, value) in env.vars() {
        text.push_str(&format!("{}={}\n", key, value));
    }
    text.push_str(&format!("url_scheme={}\n", env.url_scheme()));
    text.push_str(&format!("run_once={}\n", env.run_once()));
    let mut body = Vec::new();
    env.input().read_to_end(&mut body)?;
    writeln!(env.errors(), "echoing {} bytes of body", body.len())?;
    text.push('\n');
    let mut data = text.into_bytes();
    data.extend(body);
    Ok(Response::new(200u16)
        .header("Content-Type", "text/plain")
        .header("Content-Length", data.len().to_string())
        .body(data))
}

pub fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let mut opt = Options {
        incremental: false,
        skip_post_put_body: false,
    };
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("
            Serves a single HTTP request from stdin to stdout, answering
            with the request environment. Meant to be started by inetd.
            ");
        ap.refer(&mut opt.incremental)
            .add_option(&["--incremental"], StoreTrue,
                "Use incremental parser (body may end with the input)");
        ap.refer(&mut opt.skip_post_put_body)
            .add_option(&["--skip-post-put-body"], StoreTrue,
                "Don't read body of POST and PUT requests");
        ap.parse_args_or_exit();
    }

    let mut cfg = Config::new();
    if opt.incremental {
        cfg.strategy(ParseStrategy::Incremental);
    }
    if opt.skip_post_put_body {
        cfg.body_policy(BodyPolicy::SkipPostPut);
    }
    SingleShot::stdio(echo).config(cfg.done()).run()
}

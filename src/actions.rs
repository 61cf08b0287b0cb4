use crate::{
    client::send,
    types::{Request, ResponseJson, BASE_URL},
};
use anyhow::{bail, Context, Result};
use log::info;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::{
    io::{self, Write},
    process,
};

pub fn action_post(c: &seahorse::Context) {
    run(c, Request::connected_post());
}

pub fn action_get(c: &seahorse::Context) {
    run(c, Request::connected_get());
}

pub fn action_users(c: &seahorse::Context) {
    run(c, Request::users());
}

fn run(c: &seahorse::Context, req: Request) {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = exec(
        BASE_URL,
        &c.args,
        &req,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    if code != 0 {
        process::exit(code);
    }
}

/// Runs one command and returns its exit code. The response goes to `out`,
/// the error chain to `err`.
fn exec<W: Write, E: Write>(
    base_url: &str,
    args: &[String],
    req: &Request,
    out: &mut W,
    err: &mut E,
) -> i32 {
    match reject_args(args).and_then(|_| call(base_url, req, out)) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {:?}", e);
            1
        }
    }
}

fn reject_args(args: &[String]) -> Result<()> {
    if !args.is_empty() {
        bail!(
            "Unexpected arguments: {}\nUsage: call-me [post|get|users]",
            args.join(" ")
        )
    }
    Ok(())
}

/// Performs the one call and writes the decoded response to `out`.
/// Nothing is written when the call fails.
fn call<W: Write>(base_url: &str, req: &Request, out: &mut W) -> Result<()> {
    let res = send(base_url, req)?;
    write_json(&res, out).with_context(|| "Failed to write response.")?;
    info!("{} {} done", req.method, req.path);
    Ok(())
}

/// Single line JSON with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

fn write_json<W: Write>(res: &ResponseJson, out: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    res.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?;
    buf.push(b'\n');
    out.write_all(&buf)?;
    Ok(())
}

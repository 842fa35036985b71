/*!
 * Monitoring
 * Diagnostic output for the shell
 */

mod tracer;

pub use tracer::init_tracing;

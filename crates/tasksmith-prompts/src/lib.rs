pub mod context;
pub mod header;
pub mod instructions;
pub mod summary;

pub use context::PromptContext;
pub use header::HEADER_TOKENS;
use tasksmith_core::ValidationTask;

/// Render the full prompt for one validation task.
///
/// Pure: the same context and task always produce the same text.
pub fn compile_prompt(ctx: &PromptContext, task: &ValidationTask) -> String {
    let task_id = header::task_number(&ctx.title).unwrap_or(header::UNKNOWN_TASK_ID);

    let mut prompt = String::new();
    ctx.append_setup(&mut prompt);
    header::append_header(&mut prompt, task_id, &task.module);
    ctx.append_context(&mut prompt, &task.module);
    ctx.append_requirements(&mut prompt);

    prompt.push_str(&format!("\nVALIDATION STEPS for {}:\n", task.module));
    context::append_numbered(&mut prompt, &task.steps);
    prompt.push('\n');

    instructions::append_instructions(&mut prompt, &task.module, &ctx.environment.task_file);
    summary::append_summary(&mut prompt, &task.module);

    prompt.trim().to_string()
}

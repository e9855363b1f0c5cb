mod cidade;
mod lora;

mod cidade;
mod defeito;
mod estado;
mod lora;
mod moto;

//! One round trip per operation: build, execute, parse.

use todo_core::{NewTodo, Todo, TodoClient, TodoPatch};

use crate::error::CliResult;
use crate::transport::Transport;

pub struct RemoteTodos<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> RemoteTodos<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn create(&self, input: &NewTodo) -> CliResult<Todo> {
        let req = self.client.build_create_todo(input)?;
        Ok(self.client.parse_create_todo(self.transport.execute(req)?)?)
    }

    pub fn read(&self, id: &str) -> CliResult<Todo> {
        let req = self.client.build_get_todo(id);
        Ok(self.client.parse_get_todo(self.transport.execute(req)?)?)
    }

    pub fn list(&self) -> CliResult<Vec<Todo>> {
        let req = self.client.build_list_todos();
        Ok(self.client.parse_list_todos(self.transport.execute(req)?)?)
    }

    pub fn update(&self, id: &str, patch: &TodoPatch) -> CliResult<Todo> {
        let req = self.client.build_update_todo(id, patch)?;
        Ok(self.client.parse_update_todo(self.transport.execute(req)?)?)
    }

    pub fn delete(&self, id: &str) -> CliResult<()> {
        let req = self.client.build_delete_todo(id);
        Ok(self.client.parse_delete_todo(self.transport.execute(req)?)?)
    }
}
